//! Keyword-based answer scoring.
//!
//! Matching is plain case-insensitive substring search: "css" is found inside
//! "access". There is no stemming and no word-boundary check.

use itertools::Itertools;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keypoints {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Partitions `keywords` into those the answer mentions and those it does not,
/// keeping the original order in both lists.
///
/// A multi-word keyword also counts as found when any one of its words occurs.
pub fn evaluate_keypoints<S: AsRef<str>>(answer: &str, keywords: &[S]) -> Keypoints {
    let answer = answer.to_lowercase();

    let (found, missing) = keywords
        .iter()
        .map(|keyword| keyword.as_ref())
        .partition::<Vec<_>, _>(|keyword| {
            let keyword = keyword.to_lowercase();
            answer.contains(&keyword)
                || keyword
                    .split_whitespace()
                    .any(|part| answer.contains(part))
        });

    Keypoints {
        found: found.into_iter().map(str::to_owned).collect(),
        missing: missing.into_iter().map(str::to_owned).collect(),
    }
}

pub fn keypoint_feedback<S: AsRef<str>>(answer: &str, keywords: &[S]) -> String {
    if keywords.is_empty() {
        return "Good answer. Try to include specific examples or metrics next time to strengthen it."
            .to_owned();
    }

    let Keypoints { found, missing } = evaluate_keypoints(answer, keywords);
    let mut feedback = String::new();

    if found.is_empty() {
        feedback.push_str("No clear key points from the expected list were detected in your answer.\n\n");
    } else {
        feedback.push_str(&format!(
            "Key points identified in your answer: {}.\n\n",
            found.iter().join(", ")
        ));
    }

    if missing.is_empty() {
        feedback.push_str("Excellent — you covered the expected key points. Well explained!");
    } else {
        feedback.push_str(&format!(
            "Missing key points that were expected for this role: {}.\n\n",
            missing.iter().join(", ")
        ));
        feedback.push_str(
            "Suggestion: Please try to include these points when answering — you can mention examples, tools, or short code/command snippets where relevant.",
        );
    }

    feedback
}
