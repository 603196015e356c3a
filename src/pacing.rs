use futures_util::Stream;
use futures_util::stream;
use strum::{Display, EnumString};

use crate::engine::{IndexSource, InterviewEngine, Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Pacing {
    Realtime,
    Instant,
}

/// Delivers the engine's pending replies one by one, waiting out each reply's
/// delay first when pacing in real time. Ends once nothing is pending.
pub fn deliveries<R: IndexSource>(
    engine: &mut InterviewEngine<R>,
    pacing: Pacing,
) -> impl Stream<Item = Message> {
    stream::unfold(engine, move |engine| async move {
        let delay = engine.next_delay()?;
        if pacing == Pacing::Realtime {
            tokio::time::sleep(delay).await;
        }

        let message = engine.deliver_next()?.clone();
        Some((message, engine))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionBank;
    use crate::engine::{Delays, FixedIndices, Speaker};
    use crate::store::{Experience, Session};
    use futures_util::{StreamExt, pin_mut};
    use std::time::Duration;
    use tokio::time::Instant;

    fn answered_engine() -> InterviewEngine<FixedIndices> {
        let mut engine =
            InterviewEngine::with_index_source(FixedIndices::new([0, 0, 0]), Delays::default());
        let session = Session {
            role: "Software Engineer".to_owned(),
            experience: Experience::Years(5),
            resume_file: None,
            job_desc_file: None,
        };
        engine.initialize(&QuestionBank::builtin(), Some(&session));
        engine.submit_answer(
            "I used the factory and observer patterns to decouple our event handling code",
        );
        engine
    }

    #[tokio::test(start_paused = true)]
    async fn realtime_waits_out_each_delay() {
        let mut engine = answered_engine();
        let start = Instant::now();

        let replies = deliveries(&mut engine, Pacing::Realtime);
        pin_mut!(replies);

        let feedback = replies.next().await.unwrap();
        assert_eq!(feedback.speaker, Speaker::Ai);
        assert!(feedback.content.contains("factory, observer"));
        assert!(start.elapsed() >= Duration::from_millis(700));
        assert!(start.elapsed() < Duration::from_millis(1500));

        let question = replies.next().await.unwrap();
        assert!(question.content.starts_with("Question 2: "));
        assert!(start.elapsed() >= Duration::from_millis(1500));

        assert!(replies.next().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn instant_pacing_does_not_sleep() {
        let mut engine = answered_engine();
        let start = Instant::now();

        let delivered: Vec<_> = deliveries(&mut engine, Pacing::Instant).collect().await;

        assert_eq!(delivered.len(), 2);
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(engine.transcript().len(), 5);
        assert_eq!(engine.next_delay(), None);
    }

    #[test]
    fn pacing_parses_lowercase_names() {
        assert_eq!("realtime".parse::<Pacing>().unwrap(), Pacing::Realtime);
        assert_eq!(Pacing::Instant.to_string(), "instant");
    }
}
