use super::MatrixError;

/// The information a single matrix cell carries about a pair of entities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The two entities carry the same label; encoded as `1`.
    Same,
    /// The two entities carry different labels; encoded as `-1`.
    Different,
    /// Nothing is known about the pair; encoded as `0`.
    #[default]
    Unknown,
}

impl Relation {
    /// The integer encoding of the relation.
    pub fn value(self) -> i64 {
        match self {
            Relation::Same => 1,
            Relation::Different => -1,
            Relation::Unknown => 0,
        }
    }
}

impl TryFrom<i64> for Relation {
    type Error = MatrixError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Relation::Same),
            -1 => Ok(Relation::Different),
            0 => Ok(Relation::Unknown),
            other => Err(MatrixError::InvalidRelationValue(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_outside_the_domain_are_rejected() {
        assert_eq!(Ok(Relation::Different), Relation::try_from(-1));
        assert_eq!(
            Err(MatrixError::InvalidRelationValue(2)),
            Relation::try_from(2)
        );
        assert_eq!(
            Err(MatrixError::InvalidRelationValue(-2)),
            Relation::try_from(-2)
        );
    }
}
