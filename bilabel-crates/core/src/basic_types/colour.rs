/// One of the two colours assigned to the nodes of the constraint graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Colour {
    Zero,
    One,
}

impl Colour {
    pub fn opposite(self) -> Colour {
        match self {
            Colour::Zero => Colour::One,
            Colour::One => Colour::Zero,
        }
    }
}

/// The semantic label given to an entity.
///
/// Colour [`Colour::One`] always denotes [`Label::A`] and [`Colour::Zero`] denotes [`Label::B`].
/// Which of the two labels is written as `1` is decided by the [`OutputPolarity`].
///
/// [`OutputPolarity`]: crate::options::OutputPolarity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    A,
    B,
}

impl From<Colour> for Label {
    fn from(colour: Colour) -> Self {
        match colour {
            Colour::One => Label::A,
            Colour::Zero => Label::B,
        }
    }
}
