//! Shared wire-payload fixtures for invocation tests.

use serde_json::{Value, json};

/// The session object used by most fixtures.
pub fn session_value() -> Value {
    json!({
        "new": false,
        "sessionId": "amzn1.echo-api.session.0000000-0000-0000-0000-00000000000",
        "application": {
            "applicationId": "amzn1.echo-sdk-ams.app.000000-d0ed-0000-ad00-000000d00ebe"
        },
        "attributes": {
            "supportedHoroscopePeriods": {
                "daily": true,
                "weekly": false,
                "monthly": false
            }
        },
        "user": {
            "userId": "amzn1.account.AM3B00000000000000000000000"
        }
    })
}

/// A minimal launch payload matching the documented wire scenario.
pub fn launch_payload() -> Value {
    json!({
        "request": {
            "type": "LaunchRequest",
            "requestId": "r1",
            "timestamp": "2015-05-13T12:34:56Z",
            "locale": "en-US"
        },
        "session": {
            "new": false,
            "sessionId": "s1",
            "application": {"applicationId": "a1"},
            "attributes": {},
            "user": {"userId": "u1"}
        }
    })
}

/// An intent payload carrying a filled `ZodiacSign` slot.
pub fn intent_payload() -> Value {
    json!({
        "request": {
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.0000000-0000-0000-0000-00000000000",
            "timestamp": "2015-05-13T12:34:56Z",
            "locale": "en-US",
            "intent": {
                "name": "GetZodiacHoroscopeIntent",
                "slots": {
                    "ZodiacSign": {"name": "ZodiacSign", "value": "virgo"}
                }
            }
        },
        "session": session_value()
    })
}

/// A session-ended payload with the given wire reason fields.
pub fn session_ended_payload(reason_fields: Value) -> Value {
    let mut request = json!({
        "type": "SessionEndedRequest",
        "requestId": "amzn1.echo-api.request.0000000-0000-0000-0000-00000000000",
        "timestamp": "2015-05-13T12:34:56Z",
        "locale": "en-US"
    });
    if let (Some(request_object), Some(extra)) = (request.as_object_mut(), reason_fields.as_object())
    {
        for (key, value) in extra {
            request_object.insert(key.clone(), value.clone());
        }
    }
    json!({
        "request": request,
        "session": session_value()
    })
}

/// Serialises a fixture payload to wire bytes.
pub fn to_bytes(payload: &Value) -> Vec<u8> {
    serde_json::to_vec(payload).expect("fixture payload should serialise")
}
