use std::str::FromStr;

use axum::http::HeaderMap;
use copydesk_common::{Actor, Role, UserId};
use uuid::Uuid;

use crate::infrastructure::http::api::ApiError;

// Identity headers set by the gateway in front of this service. The
// service trusts them as-is; requests reaching /api without a complete,
// parseable pair are unauthenticated.

pub const ACTING_USER_ID_HEADER: &str = "x-acting-user-id";
pub const ACTING_USER_ROLE_HEADER: &str = "x-acting-user-role";

pub fn authenticate(headers: &HeaderMap) -> Result<Actor, ApiError> {
    let user_id = header_value(headers, ACTING_USER_ID_HEADER)?;
    let role = header_value(headers, ACTING_USER_ROLE_HEADER)?;

    let user_id = Uuid::parse_str(user_id).map_err(|_| {
        ApiError::Unauthenticated(format!("{ACTING_USER_ID_HEADER} is not a valid user id"))
    })?;
    let role = Role::from_str(role).map_err(|_| {
        ApiError::Unauthenticated(format!("{ACTING_USER_ROLE_HEADER} is not a valid role"))
    })?;

    Ok(Actor {
        user_id: UserId(user_id),
        role,
    })
}

fn header_value<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str, ApiError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::Unauthenticated(format!("missing {name} header")))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(user_id: &str, role: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACTING_USER_ID_HEADER,
            HeaderValue::from_str(user_id).unwrap(),
        );
        headers.insert(ACTING_USER_ROLE_HEADER, HeaderValue::from_str(role).unwrap());
        headers
    }

    #[test]
    fn a_complete_header_pair_authenticates() {
        let user_id = Uuid::new_v4();
        let actor = authenticate(&headers(&user_id.to_string(), "senior_editor")).unwrap();

        assert_eq!(actor.user_id, UserId(user_id));
        assert_eq!(actor.role, Role::SeniorEditor);
    }

    #[test]
    fn missing_headers_are_unauthenticated() {
        let refused = authenticate(&HeaderMap::new());
        assert!(matches!(refused, Err(ApiError::Unauthenticated(_))));
    }

    #[test]
    fn an_unparseable_user_id_is_unauthenticated() {
        let refused = authenticate(&headers("not-a-uuid", "editor"));
        assert!(matches!(refused, Err(ApiError::Unauthenticated(_))));
    }

    #[test]
    fn an_unknown_role_is_unauthenticated() {
        let user_id = Uuid::new_v4().to_string();
        let refused = authenticate(&headers(&user_id, "chief_of_staff"));
        assert!(matches!(refused, Err(ApiError::Unauthenticated(_))));
    }
}
