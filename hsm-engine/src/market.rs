use crate::{AnchorGreedy, GroupStrategy, Round, SocialVector, second_price_payments};
use hsm_core::models::{
    Apartment, ApartmentId, AssignmentRecord, Map, Person, PersonId, Share,
};
use tracing::{Level, event, span};

/// An unassigned person, together with their derived social vector.
#[derive(Debug, Clone)]
pub struct Applicant {
    /// The person's record
    pub person: Person,
    /// Computed once, when the person enters the market
    pub social: SocialVector,
}

impl From<Person> for Applicant {
    fn from(person: Person) -> Self {
        let social = SocialVector::new(&person.preferences);
        Self { person, social }
    }
}

/// The ways in which a market cannot be set up
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MarketError {
    /// Two people share an identifier
    #[error("person {0} is listed more than once")]
    DuplicatePerson(PersonId),
    /// Two apartments share an identifier
    #[error("apartment {0} is listed more than once")]
    DuplicateApartment(ApartmentId),
}

/// Why a matching pass stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Everybody has been housed
    PeopleExhausted,
    /// Every apartment has been let
    ApartmentsExhausted,
    /// The group strategy proposed nothing
    NoGroups,
    /// No apartment received an eligible bid
    NoBids,
}

/// The result of a single round
#[derive(Debug)]
pub enum Step {
    /// An apartment was assigned to a group
    Assigned(AssignmentRecord),
    /// An apartment was withdrawn because its winning bid was unusable
    Withdrawn(ApartmentId),
    /// The pass is over
    Done(Termination),
}

/// Everything produced by a full matching pass.
#[derive(Debug)]
pub struct MatchOutcome {
    /// The assignments, in the order they were made
    pub assignments: Vec<AssignmentRecord>,
    /// The people left without an apartment
    pub unassigned: Vec<Person>,
    /// The apartments left without tenants
    pub vacant: Vec<Apartment>,
    /// The number of rounds that assigned or withdrew an apartment
    pub rounds: usize,
    /// Why the pass stopped
    pub termination: Termination,
}

/// The assignment loop controller.
///
/// The market owns the two working sets, the unassigned people and the
/// available apartments, and is the only thing that ever removes from them.
/// Each round removes exactly one apartment and, unless it is withdrawn, at
/// least one person, so a pass runs at most `min(people, apartments)` rounds.
pub struct Market<S = AnchorGreedy> {
    pool: Map<PersonId, Applicant>,
    available: Map<ApartmentId, Apartment>,
    strategy: S,
}

impl Market {
    /// Create a market over `people` and `apartments`, using the anchor-greedy
    /// group strategy.
    pub fn new<P, A>(people: P, apartments: A) -> Result<Self, MarketError>
    where
        P: IntoIterator<Item = Person>,
        A: IntoIterator<Item = Apartment>,
    {
        Self::with_strategy(people, apartments, AnchorGreedy)
    }
}

impl<S: GroupStrategy> Market<S> {
    /// Create a market with a specific group strategy.
    ///
    /// People keep the order they are given in; it is the order in which they
    /// act as anchors and the order that breaks compatibility ties.
    pub fn with_strategy<P, A>(people: P, apartments: A, strategy: S) -> Result<Self, MarketError>
    where
        P: IntoIterator<Item = Person>,
        A: IntoIterator<Item = Apartment>,
    {
        let mut pool = Map::default();
        for person in people {
            let id = person.id.clone();
            if pool.insert(id.clone(), Applicant::from(person)).is_some() {
                return Err(MarketError::DuplicatePerson(id));
            }
        }

        let mut available = Map::default();
        for apartment in apartments {
            let id = apartment.id;
            if available.insert(id, apartment).is_some() {
                return Err(MarketError::DuplicateApartment(id));
            }
        }
        available.sort_keys();

        Ok(Self {
            pool,
            available,
            strategy,
        })
    }

    /// The people not yet assigned, in pool order
    pub fn unassigned(&self) -> impl Iterator<Item = &Person> {
        self.pool.values().map(|applicant| &applicant.person)
    }

    /// The apartments not yet assigned, by ascending id
    pub fn available(&self) -> impl Iterator<Item = &Apartment> {
        self.available.values()
    }

    /// Run one round: propose groups, collect bids, award the best apartment
    /// and remove the winners from the working sets.
    pub fn step(&mut self) -> Step {
        if self.pool.is_empty() {
            return Step::Done(Termination::PeopleExhausted);
        }
        if self.available.is_empty() {
            return Step::Done(Termination::ApartmentsExhausted);
        }

        event!(
            Level::INFO,
            unassigned = self.pool.len(),
            available = self.available.len()
        );

        let groups = self.strategy.generate(&self.pool);
        if groups.is_empty() {
            event!(Level::INFO, "no more potential groups can be formed");
            return Step::Done(Termination::NoGroups);
        }
        event!(Level::INFO, groups = groups.len(), "generated potential groups");

        let round = Round::new(&self.pool, &groups);
        let Some(selection) = round.select(self.available.values()) else {
            event!(Level::INFO, "no apartment received a valid bid");
            return Step::Done(Termination::NoBids);
        };

        let apartment_id = selection.apartment.id;
        let winner = selection.best();
        let second_bid = selection.second_total();

        let payments = match second_price_payments(winner, second_bid) {
            Ok(payments) => payments,
            Err(error) => {
                event!(
                    Level::WARN,
                    apartment = %selection.apartment.name,
                    %error,
                    "withdrawing apartment without an assignment"
                );
                self.available.shift_remove(&apartment_id);
                return Step::Withdrawn(apartment_id);
            }
        };

        let shares = winner
            .bids
            .iter()
            .map(|(id, &adjusted_bid)| {
                let name = self
                    .pool
                    .get(id)
                    .map(|applicant| applicant.person.name.clone())
                    .unwrap_or_default();
                let payment = payments.get(id).copied().unwrap_or_default();
                (
                    id.clone(),
                    Share {
                        name,
                        adjusted_bid,
                        payment,
                    },
                )
            })
            .collect::<Map<_, _>>();

        let record = AssignmentRecord {
            apartment: selection.apartment.clone(),
            group: winner.group.clone(),
            winning_bid: winner.total,
            second_bid,
            shares,
        };

        event!(
            Level::INFO,
            apartment = %record.apartment.name,
            group = %record.group,
            winning_bid = record.winning_bid,
            second_bid = record.second_bid,
            "assigned apartment"
        );
        for share in record.shares.values() {
            event!(
                Level::INFO,
                person = %share.name,
                payment = share.payment,
                adjusted_bid = share.adjusted_bid
            );
        }

        for id in record.group.members() {
            self.pool.shift_remove(id);
        }
        self.available.shift_remove(&apartment_id);

        Step::Assigned(record)
    }

    /// Run rounds until the pass terminates.
    pub fn run(mut self) -> MatchOutcome {
        let mut assignments = Vec::new();
        let mut rounds = 0;

        let termination = loop {
            let span = span!(Level::INFO, "round", number = rounds + 1);
            let _guard = span.enter();

            match self.step() {
                Step::Assigned(record) => assignments.push(record),
                Step::Withdrawn(_) => {}
                Step::Done(termination) => break termination,
            }
            rounds += 1;
        };

        event!(
            Level::INFO,
            rounds,
            assignments = assignments.len(),
            ?termination,
            "matching complete"
        );

        MatchOutcome {
            assignments,
            unassigned: self
                .pool
                .into_iter()
                .map(|(_, applicant)| applicant.person)
                .collect(),
            vacant: self.available.into_iter().map(|(_, apartment)| apartment).collect(),
            rounds,
            termination,
        }
    }
}
