use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;
use strum::Display;

use crate::bank::{Candidate, QuestionBank};
use crate::evaluation::{keypoint_feedback, word_count};
use crate::store::{Session, SessionStore};

/// Initial answers with fewer words than this are sent back for elaboration.
pub const SHORT_ANSWER_THRESHOLD: usize = 10;
/// Elaborations with fewer words than this are sent back again.
pub const ELABORATION_THRESHOLD: usize = 12;

const NO_SESSION: &str = "No session found. Please create a session first.";
const ASK_TO_ELABORATE: &str = "Please clarify your points more — try elaborating with examples, steps you took, tools used, or reasoning. (Provide a few sentences so I can give detailed feedback.)";
const ASK_TO_ELABORATE_FURTHER: &str = "Thanks — that helps a bit. Could you please provide more details or an example (mention tools/libs or steps you used)? Try to write at least a couple of sentences.";
const GENERAL_FEEDBACK: &str =
    "Good depth — include references to performance, testing, or metrics when possible.";
const DETAILED_FEEDBACK: &str = "Good structure — highlight challenges you faced and how you resolved them, and mention measurable outcomes (e.g., improved performance by X%).";

const MOTIVATIONAL_LINES: [&str; 3] = [
    "Keep going! Every step counts.",
    "You're improving with every answer!",
    "Believe in yourself, you will succeed!",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Speaker {
    Ai,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: u64,
    #[serde(rename = "type")]
    pub speaker: Speaker,
    pub content: String,
}

/// An AI message waiting for its "thinking" delay before joining the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub delay: Duration,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub reply: Duration,
    pub follow_up: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            reply: Duration::from_millis(700),
            follow_up: Duration::from_millis(800),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank input, or the interview is already over.
    Ignored,
    NeedsElaboration,
    Accepted { next_question: usize },
    Finished,
}

pub trait IndexSource {
    /// Returns an index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

pub struct UniformIndex(StdRng);

impl UniformIndex {
    pub fn new() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for UniformIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for UniformIndex {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

#[cfg(test)]
pub(crate) struct FixedIndices(VecDeque<usize>);

#[cfg(test)]
impl FixedIndices {
    pub(crate) fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self(indices.into_iter().collect())
    }
}

#[cfg(test)]
impl IndexSource for FixedIndices {
    fn next_index(&mut self, _bound: usize) -> usize {
        self.0.pop_front().unwrap_or(0)
    }
}

pub struct InterviewEngine<R = UniformIndex> {
    indices: R,
    delays: Delays,
    role: String,
    selected: Vec<Candidate>,
    current: usize,
    awaiting_elaboration: bool,
    transcript: Vec<Message>,
    outbox: VecDeque<Pending>,
    next_id: u64,
}

impl InterviewEngine {
    pub fn new(delays: Delays) -> Self {
        Self::with_index_source(UniformIndex::new(), delays)
    }
}

impl<R: IndexSource> InterviewEngine<R> {
    pub fn with_index_source(indices: R, delays: Delays) -> Self {
        Self {
            indices,
            delays,
            role: String::new(),
            selected: Vec::new(),
            current: 0,
            awaiting_elaboration: false,
            transcript: Vec::new(),
            outbox: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Starts a fresh interview, discarding the previous transcript and any
    /// replies that were still waiting to be delivered.
    pub fn initialize(&mut self, bank: &QuestionBank, session: Option<&Session>) {
        self.selected.clear();
        self.transcript.clear();
        self.outbox.clear();
        self.current = 0;
        self.awaiting_elaboration = false;

        let Some(session) = session else {
            tracing::info!("No stored session, interview not started");
            self.role.clear();
            self.append(Speaker::Ai, NO_SESSION.to_owned());
            return;
        };

        let (role, groups) = bank.resolve(Some(session.role.as_str()));
        self.role = role.to_owned();

        for group in groups {
            let bound = group.candidates.len();
            let chosen = self.indices.next_index(bound) % bound;
            self.selected.push(group.candidates[chosen].clone());
        }

        tracing::info!(role = %self.role, questions = self.selected.len(), "Interview initialized");

        let resume = session
            .resume_file
            .as_ref()
            .map_or("resume.pdf", |file| file.name.as_str());
        let job_description = session
            .job_desc_file
            .as_ref()
            .map_or("jobdesc.txt", |file| file.name.as_str());

        self.append(
            Speaker::Ai,
            format!(
                "Hello! I reviewed your resume ({resume}) and job description ({job_description}). Let's begin your {} interview.",
                self.role
            ),
        );
        if let Some(first) = self.selected.first() {
            let prompt = format!("Question 1: {}", first.question);
            self.append(Speaker::Ai, prompt);
        }
    }

    /// Reads the current session from `store` and initializes from it.
    pub async fn start<S: SessionStore>(&mut self, bank: &QuestionBank, store: &S) {
        let session = store.get().await;
        self.initialize(bank, session.as_ref());
    }

    pub fn submit_answer(&mut self, text: &str) -> Submission {
        let text = text.trim();
        if text.is_empty() || self.is_complete() {
            return Submission::Ignored;
        }

        self.append(Speaker::User, text.to_owned());
        let words = word_count(text);

        if self.awaiting_elaboration {
            if words < ELABORATION_THRESHOLD {
                tracing::debug!(words, "Elaboration still too short");
                self.queue(self.delays.reply, ASK_TO_ELABORATE_FURTHER.to_owned());
                return Submission::NeedsElaboration;
            }

            let feedback = keypoint_feedback(text, self.selected[self.current].keywords.as_slice());
            self.queue(
                self.delays.reply,
                format!("{feedback}\n\nDetailed feedback: {DETAILED_FEEDBACK}"),
            );
            self.awaiting_elaboration = false;
        } else {
            if words < SHORT_ANSWER_THRESHOLD {
                tracing::debug!(words, "Answer too short, asking for elaboration");
                self.awaiting_elaboration = true;
                self.queue(self.delays.reply, ASK_TO_ELABORATE.to_owned());
                return Submission::NeedsElaboration;
            }

            let feedback = keypoint_feedback(text, self.selected[self.current].keywords.as_slice());
            self.queue(
                self.delays.reply,
                format!("{feedback}\n\nFeedback: {GENERAL_FEEDBACK}"),
            );
        }

        self.advance_or_finish()
    }

    fn advance_or_finish(&mut self) -> Submission {
        let next = self.current + 1;

        if let Some(candidate) = self.selected.get(next) {
            let prompt = format!("Question {}: {}", next + 1, candidate.question);
            self.queue(self.delays.follow_up, prompt);
            self.current = next;
            return Submission::Accepted {
                next_question: next,
            };
        }

        let line = MOTIVATIONAL_LINES[self.indices.next_index(MOTIVATIONAL_LINES.len())
            % MOTIVATIONAL_LINES.len()];
        let closing = format!(
            "🎉 Great job — you've completed the interview session for {}! {line}",
            self.role
        );
        self.queue(self.delays.follow_up, closing);
        self.current = self.selected.len();

        tracing::info!(role = %self.role, "Interview complete");
        Submission::Finished
    }

    /// Delay to wait before the next pending reply may be delivered.
    pub fn next_delay(&self) -> Option<Duration> {
        self.outbox.front().map(|pending| pending.delay)
    }

    /// Moves the oldest pending reply into the transcript.
    pub fn deliver_next(&mut self) -> Option<&Message> {
        let pending = self.outbox.pop_front()?;
        self.append(Speaker::Ai, pending.content);
        self.transcript.last()
    }

    #[cfg(test)]
    pub fn pending(&self) -> impl Iterator<Item = &Pending> {
        self.outbox.iter()
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn awaiting_elaboration(&self) -> bool {
        self.awaiting_elaboration
    }

    pub fn current_question_index(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_complete(&self) -> bool {
        self.current == self.selected.len()
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn selected_questions(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(|c| c.question.as_str())
    }

    pub fn selected_keywords(&self) -> impl Iterator<Item = &[String]> {
        self.selected.iter().map(|c| c.keywords.as_slice())
    }

    fn queue(&mut self, delay: Duration, content: String) {
        self.outbox.push_back(Pending { delay, content });
    }

    fn append(&mut self, speaker: Speaker, content: String) {
        self.transcript.push(Message {
            id: self.next_id,
            speaker,
            content,
        });
        self.next_id += 1;
    }
}
