//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionResult, blacklist_section, digit_section, length_section, lowercase_section,
    special_section, uppercase_section,
};
use crate::types::{PasswordEvaluation, PasswordScore, PasswordStrength};

/// Sole feedback entry of a strong evaluation.
pub const STRONG_MESSAGE: &str = "Great job! Your password meets all the criteria.";

/// Delay before [`evaluate_password_strength_tx`] evaluates, so that a UI
/// firing on every keystroke can cancel stale requests.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Scoring criteria, in feedback order.
const SECTIONS: [fn(&SecretString) -> SectionResult; 5] = [
    length_section,
    uppercase_section,
    lowercase_section,
    digit_section,
    special_section,
];

/// Evaluates password strength and returns score and feedback.
///
/// A blacklisted password short-circuits to a score of 1 with a single
/// message. Otherwise each satisfied criterion adds one point and each unmet
/// one adds a suggestion. A full score replaces the suggestions with
/// [`STRONG_MESSAGE`].
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    #[cfg(feature = "async")]
    let is_cancelled = || token.as_ref().is_some_and(|t| t.is_cancelled());

    #[cfg(feature = "async")]
    {
        if is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before blacklist check");
            return PasswordEvaluation::cancelled();
        }
    }

    if let Some(reason) = blacklist_section(password) {
        return PasswordEvaluation::new(PasswordScore::new(1), vec![reason]);
    }

    let mut points: u8 = 0;
    let mut feedback = Vec::new();

    for section_fn in SECTIONS {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("evaluation cancelled between sections");
                return PasswordEvaluation::cancelled();
            }
        }

        match section_fn(password) {
            Some(suggestion) => feedback.push(suggestion),
            None => points += 1,
        }
    }

    let score = PasswordScore::new(points);
    if PasswordStrength::from_score(score) == PasswordStrength::Strong {
        feedback = vec![STRONG_MESSAGE.to_string()];
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(score = score.value(), "password evaluated");

    PasswordEvaluation::new(score, feedback)
}

/// Async version that sends evaluation result via channel.
///
/// Waits [`EVALUATION_DEBOUNCE`] first. If `token` is cancelled meanwhile the
/// receiver gets [`PasswordEvaluation::cancelled`].
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::time::sleep(EVALUATION_DEBOUNCE).await;
    let evaluation = evaluate_password_strength(password, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_evaluate_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        let evaluation = evaluate_password_strength(&pwd, Some(token));

        assert_eq!(evaluation, PasswordEvaluation::cancelled());
        assert!(evaluation.is_cancelled());
    }

    #[tokio::test]
    async fn test_evaluate_without_cancellation() {
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        let evaluation = evaluate_password_strength(&pwd, Some(token));

        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        assert!(!evaluation.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123".to_string().into());

        evaluate_password_strength_tx(&pwd, token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.score.value(), 4);
        assert_eq!(evaluation.strength(), PasswordStrength::Moderate);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("TestPass123!".to_string().into());

        evaluate_password_strength_tx(&pwd, token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation, PasswordEvaluation::cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx_cancel_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            evaluate_password_strength_tx(&pwd, task_token, tx).await;
        });

        // Let the task start its debounce sleep.
        tokio::task::yield_now().await;
        tokio::time::advance(EVALUATION_DEBOUNCE - Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err(), "nothing is sent before the debounce ends");

        token.cancel();

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert!(evaluation.is_cancelled());
        assert_eq!(evaluation, PasswordEvaluation::cancelled());

        handle.await.expect("evaluation task panicked");
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let pwd = SecretString::new("TestPass123!".to_string().into());

        // Must not panic when nobody is listening.
        evaluate_password_strength_tx(&pwd, CancellationToken::new(), tx).await;
    }
}
