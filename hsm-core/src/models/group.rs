use super::PersonId;

/// A candidate set of co-applicants.
///
/// Membership is order-irrelevant: the ids are kept sorted and deduplicated,
/// so two groups with the same members are equal and hash the same.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Group(Vec<PersonId>);

impl Group {
    /// The group containing just `id`
    pub fn singleton(id: PersonId) -> Self {
        Self(vec![id])
    }

    /// The members, in ascending id order
    pub fn members(&self) -> &[PersonId] {
        &self.0
    }

    /// The number of distinct members
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the group has no members
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `id` is a member
    pub fn contains(&self, id: &PersonId) -> bool {
        self.0.binary_search(id).is_ok()
    }
}

impl FromIterator<PersonId> for Group {
    fn from_iter<I: IntoIterator<Item = PersonId>>(iter: I) -> Self {
        let mut ids = iter.into_iter().collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        Self(ids)
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, ")")
    }
}
