// ============================================================================
// AUTH SERVICE - Sign-in vía proveedor de identidad externo
// ============================================================================
// SOLO comunicación con el proveedor: la lógica de sesión vive en el ViewModel
// ============================================================================

use async_trait::async_trait;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use crate::config::CONFIG;
use crate::models::session::{ProviderUser, Session};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("sign-in rejected: {0}")]
    Rejected(String),
    #[error("invalid user object: {0}")]
    InvalidUser(String),
    #[error("identity provider returned no user")]
    NoUser,
    #[error("a sign-in attempt is already in progress")]
    AlreadyInProgress,
    #[error("sign-in attempt was cancelled")]
    Cancelled,
}

/// Colaborador externo: autentica al usuario actual y devuelve su sesión
#[async_trait(?Send)]
pub trait IdentityProvider {
    async fn sign_in(&self) -> Result<Session, AuthError>;
}

/// Proveedor respaldado por una función JS global (p.ej. window.signInWithGoogle)
/// que devuelve una Promise con el user de Firebase.
pub struct FirebaseIdentityProvider {
    function_name: String,
}

impl FirebaseIdentityProvider {
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.identity_provider_fn.clone())
    }

    fn resolve_function(&self) -> Result<js_sys::Function, AuthError> {
        let window = web_sys::window()
            .ok_or_else(|| AuthError::ProviderUnavailable("no window".to_string()))?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(&self.function_name))
            .map_err(|e| AuthError::ProviderUnavailable(js_error_message(&e)))?;
        value.dyn_into::<js_sys::Function>().map_err(|_| {
            AuthError::ProviderUnavailable(format!("window.{} is not a function", self.function_name))
        })
    }
}

impl Default for FirebaseIdentityProvider {
    fn default() -> Self {
        Self::from_config()
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn sign_in(&self) -> Result<Session, AuthError> {
        let function = self.resolve_function()?;
        log::info!("🔐 [AUTH] Llamando a window.{}()", self.function_name);

        let returned = function
            .call0(&JsValue::NULL)
            .map_err(|e| AuthError::Rejected(js_error_message(&e)))?;

        // Aceptar tanto Promise como valor directo
        let user = match returned.dyn_into::<js_sys::Promise>() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .map_err(|e| AuthError::Rejected(js_error_message(&e)))?,
            Err(value) => value,
        };

        if user.is_null() || user.is_undefined() {
            return Err(AuthError::NoUser);
        }

        let json: String = js_sys::JSON::stringify(&user)
            .map_err(|e| AuthError::InvalidUser(js_error_message(&e)))?
            .into();

        let mut provider_user = ProviderUser::from_json(&json)
            .map_err(|e| AuthError::InvalidUser(e.to_string()))?;

        // user.accessToken es un getter en Firebase v9+: no siempre sale en el JSON
        if provider_user.access_token.is_none() {
            provider_user.access_token = js_sys::Reflect::get(&user, &JsValue::from_str("accessToken"))
                .ok()
                .and_then(|v| v.as_string());
        }

        Ok(provider_user.into_session())
    }
}

/// Mensaje legible de un error JS (Error.message o el valor tal cual)
fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(AuthError::NoUser.to_string(), "identity provider returned no user");
        assert_eq!(
            AuthError::Rejected("popup closed".to_string()).to_string(),
            "sign-in rejected: popup closed"
        );
    }
}
