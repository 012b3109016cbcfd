//! Configuration of a solve call.
use std::fmt::Display;

use crate::basic_types::Label;

/// Decides which [`Label`] is written as `1` in the rendered labelling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputPolarity {
    /// [`Label::A`] is written as `1` and [`Label::B`] as `0`.
    #[default]
    LabelAIsOne,
    /// [`Label::B`] is written as `1` and [`Label::A`] as `0`.
    LabelBIsOne,
}

impl OutputPolarity {
    pub fn render(self, label: Label) -> char {
        match (self, label) {
            (OutputPolarity::LabelAIsOne, Label::A) | (OutputPolarity::LabelBIsOne, Label::B) => {
                '1'
            }
            (OutputPolarity::LabelAIsOne, Label::B) | (OutputPolarity::LabelBIsOne, Label::A) => {
                '0'
            }
        }
    }
}

impl Display for OutputPolarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputPolarity::LabelAIsOne => write!(f, "label-a-is-one"),
            OutputPolarity::LabelBIsOne => write!(f, "label-b-is-one"),
        }
    }
}

/// How the colour of the first node of each connected component of the constraint graph is
/// chosen.
///
/// A labelling and its exact inverse are equally valid, so every component needs a rule to pick
/// one of the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum StartPolicy {
    /// Every component starts with colour one, i.e. [`Label::A`]. The component of entity 0 is
    /// coloured first, so entity 0 always receives [`Label::A`].
    #[default]
    FixedStart,
    /// Every component is coloured twice, once per start colour, and the colouring whose
    /// rendered labels (over the entities of that component, in entity order) are
    /// lexicographically smaller is kept.
    ///
    /// The choice is made independently for every component.
    LexicographicallyMinimal,
}

impl Display for StartPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartPolicy::FixedStart => write!(f, "fixed-start"),
            StartPolicy::LexicographicallyMinimal => write!(f, "lexicographically-minimal"),
        }
    }
}

/// The options of a solve call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverOptions {
    pub output_polarity: OutputPolarity,
    pub start_policy: StartPolicy,
}
