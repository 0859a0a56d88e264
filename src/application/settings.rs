// 凭证设置
use crate::domain::error::AppError;
use crate::domain::model::ProviderKind;
use crate::domain::traits::CredentialStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CredentialStatus {
    pub provider: ProviderKind,
    pub configured: bool,
    /// Masked hint such as `****wxyz`; never the full secret.
    pub preview: Option<String>,
}

pub fn save_credential(
    store: &dyn CredentialStore,
    provider: ProviderKind,
    secret: &str,
) -> Result<(), AppError> {
    let secret = secret.trim();
    if secret.is_empty() {
        return Err(AppError::Config(format!(
            "Refusing to save an empty {} API key",
            provider
        )));
    }
    store.save(provider.credential_key(), secret)?;
    Ok(())
}

pub fn delete_credential(store: &dyn CredentialStore, provider: ProviderKind) -> Result<(), AppError> {
    store.delete(provider.credential_key())?;
    Ok(())
}

/// Whether each provider has a usable secret. Store failures count as
/// "not configured" and are logged.
pub fn credential_status(store: &dyn CredentialStore) -> Vec<CredentialStatus> {
    ProviderKind::ALL
        .into_iter()
        .map(|provider| {
            let secret = match store.get(provider.credential_key()) {
                Ok(secret) => secret.filter(|s| !s.trim().is_empty()),
                Err(e) => {
                    tracing::warn!(%provider, error = %e, "cannot read credential");
                    None
                }
            };
            CredentialStatus {
                provider,
                configured: secret.is_some(),
                preview: secret.as_deref().map(mask_secret),
            }
        })
        .collect()
}

/// Show at most the last four characters, and only for long secrets.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.trim().chars().collect();
    if chars.len() <= 8 {
        return "********".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
