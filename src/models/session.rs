use serde::{Deserialize, Serialize};

// ============================================================================
// SESIÓN - Usuario autenticado + token opcional
// ============================================================================

/// Perfil del usuario tal como lo devuelve el proveedor de identidad.
/// Para la app es opaco: solo se conserva para mostrarlo/loguearlo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl AuthUser {
    /// Texto corto para logs (email > nombre > uid)
    pub fn label(&self) -> &str {
        self.email
            .as_deref()
            .or(self.display_name.as_deref())
            .or(self.uid.as_deref())
            .unwrap_or("anonymous")
    }
}

/// Sesión activa. Solo la posee el AuthState (root controller).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: AuthUser,
    pub token: Option<String>,
}

impl Session {
    /// Un token vacío se trata como ausente
    pub fn new(user: AuthUser, token: Option<String>) -> Self {
        Self {
            user,
            token: token.filter(|t| !t.is_empty()),
        }
    }
}

/// Objeto usuario del proveedor (JSON.stringify del user de Firebase).
/// El access token puede venir plano o dentro de stsTokenManager.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderUser {
    #[serde(flatten)]
    pub profile: AuthUser,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub sts_token_manager: Option<StsTokenManager>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StsTokenManager {
    #[serde(default)]
    pub access_token: Option<String>,
}

impl ProviderUser {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn into_session(self) -> Session {
        let token = self
            .access_token
            .filter(|t| !t.is_empty())
            .or_else(|| self.sts_token_manager.and_then(|m| m.access_token));
        Session::new(self.profile, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_becomes_none() {
        let session = Session::new(AuthUser::default(), Some(String::new()));
        assert_eq!(session.token, None);
    }

    #[test]
    fn parses_firebase_user_with_plain_token() {
        let json = r#"{"uid":"u1","displayName":"Jane Doe","email":"jane@x.com","accessToken":"tok-1"}"#;
        let session = ProviderUser::from_json(json).unwrap().into_session();
        assert_eq!(session.user.uid.as_deref(), Some("u1"));
        assert_eq!(session.user.display_name.as_deref(), Some("Jane Doe"));
        assert_eq!(session.token.as_deref(), Some("tok-1"));
    }

    #[test]
    fn falls_back_to_sts_token_manager() {
        let json = r#"{"uid":"u2","email":"bob@x.com","stsTokenManager":{"accessToken":"tok-2","expirationTime":1}}"#;
        let session = ProviderUser::from_json(json).unwrap().into_session();
        assert_eq!(session.token.as_deref(), Some("tok-2"));
        assert_eq!(session.user.label(), "bob@x.com");
    }

    #[test]
    fn user_without_token_or_profile() {
        let session = ProviderUser::from_json("{}").unwrap().into_session();
        assert_eq!(session.token, None);
        assert_eq!(session.user.label(), "anonymous");
    }
}
