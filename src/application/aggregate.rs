use crate::domain::error::TranslateError;
use crate::domain::model::{sort_outcomes, ProviderKind, TranslationOutcome, TranslationRequest};
use crate::domain::traits::Translator;
use crate::state::AppState;
use futures_util::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

/// Run every adapter concurrently and return one outcome per adapter.
///
/// A failing provider never affects the others, and nothing is cancelled
/// early. The result is ordered successes first, failures last, each group
/// in the order `translators` was given.
pub async fn translate_all(
    request: &TranslationRequest,
    translators: &[Arc<dyn Translator>],
) -> Vec<TranslationOutcome> {
    let handles: Vec<_> = translators
        .iter()
        .map(|translator| {
            let translator = Arc::clone(translator);
            let request = request.clone();
            let span = tracing::info_span!("translate", provider = translator.name());

            tokio::spawn(
                async move {
                    let started = Instant::now();
                    let result = translator.translate(&request).await;
                    let elapsed_ms = started.elapsed().as_millis() as u64;
                    match &result {
                        Ok(_) => tracing::debug!(elapsed_ms, "translation finished"),
                        Err(e) => {
                            tracing::warn!(elapsed_ms, kind = ?e.kind(), error = %e, "translation failed")
                        }
                    }
                    TranslationOutcome::from_result(translator.name(), result)
                }
                .instrument(span),
            )
        })
        .collect();

    // join_all keeps input order, which pairs each handle with its adapter
    let mut outcomes: Vec<TranslationOutcome> = join_all(handles)
        .await
        .into_iter()
        .zip(translators)
        .map(|(joined, translator)| match joined {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(provider = translator.name(), error = %e, "translation task aborted");
                TranslationOutcome::failure(
                    translator.name(),
                    &TranslateError::Unknown(format!("translation task aborted: {}", e)),
                )
            }
        })
        .collect();

    sort_outcomes(&mut outcomes);
    outcomes
}

/// Build the request and the configured adapter set, then run one round.
pub async fn translate_text(
    state: &AppState,
    text: &str,
    source_language: &str,
    target_language: &str,
    only: &[ProviderKind],
) -> Result<Vec<TranslationOutcome>, TranslateError> {
    let request = TranslationRequest::new(text, source_language, target_language)?;
    let translators = state.translators(only);
    if translators.is_empty() {
        return Err(TranslateError::Configuration(
            "No translation provider is enabled".to_string(),
        ));
    }

    tracing::info!(
        providers = translators.len(),
        source = request.source_language(),
        target = request.target_language(),
        "starting translation round"
    );
    Ok(translate_all(&request, &translators).await)
}
