use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::models::domain::media::MediaDescriptor;

pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: [String; OPTION_COUNT],
    #[serde(default)]
    pub correct: usize, // index into `options`, in stored order
    #[serde(default)]
    pub display_media: Option<MediaDescriptor>,
    #[serde(default)]
    pub after_media: Option<MediaDescriptor>,
}

/// A question with its options in display order.
///
/// `correct` points at the same answer as the stored question, wherever the
/// shuffle moved it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuffledQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub display_media: Option<MediaDescriptor>,
    pub after_media: Option<MediaDescriptor>,
}

impl Question {
    /// Stored documents may carry an out-of-range index; those fall back to the first option.
    pub fn correct_index(&self) -> usize {
        if self.correct < OPTION_COUNT {
            self.correct
        } else {
            0
        }
    }

    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_index()]
    }

    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> ShuffledQuestion {
        let mut order: Vec<usize> = (0..OPTION_COUNT).collect();
        order.shuffle(rng);

        let correct_index = self.correct_index();
        let correct = order
            .iter()
            .position(|&i| i == correct_index)
            .unwrap_or_default();

        ShuffledQuestion {
            question: self.question.clone(),
            options: order.iter().map(|&i| self.options[i].clone()).collect(),
            correct,
            display_media: self.display_media.clone(),
            after_media: self.after_media.clone(),
        }
    }
}
