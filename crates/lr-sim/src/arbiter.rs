//! Direction arbitration: turning buffered intents into headings.

use lr_core::{AgentId, Direction};
use lr_provider::PendingIntent;
use lr_roster::Roster;

/// What happened to one pending intent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Arbitration {
    /// The rider's heading changed from `from` to the requested direction.
    Adopted { from: Direction },
    /// The rider was already heading that way.
    Unchanged,
    /// The request was the exact opposite of the current heading; dropped.
    Reversal,
    /// Unknown rider, crashed rider, or an intent from the wrong source.
    Ignored,
}

/// One arbitrated intent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Decision {
    pub agent:     AgentId,
    pub direction: Direction,
    pub outcome:   Arbitration,
}

/// Apply this tick's intents to the riders' headings.
///
/// `external` comes from the intent table and only steers human riders;
/// `provided` comes from the move provider and only steers automated riders.
/// Everything else is ignored.  Intents are processed external first, then
/// provided, each in the order given; at most one intent per rider per source
/// reaches here because the intent table keeps one slot per rider.
pub fn arbitrate(
    roster:   &mut Roster,
    external: Vec<PendingIntent>,
    provided: Vec<PendingIntent>,
) -> Vec<Decision> {
    let mut decisions = Vec::with_capacity(external.len() + provided.len());

    for (intent, from_provider) in external
        .into_iter()
        .map(|i| (i, false))
        .chain(provided.into_iter().map(|i| (i, true)))
    {
        let outcome = match roster.get_mut(intent.agent) {
            Some(rider) if rider.alive && rider.kind.is_automated() == from_provider => {
                steer(&mut rider.heading, intent.direction)
            }
            _ => Arbitration::Ignored,
        };
        decisions.push(Decision {
            agent:     intent.agent,
            direction: intent.direction,
            outcome,
        });
    }

    decisions
}

fn steer(heading: &mut Direction, wanted: Direction) -> Arbitration {
    if *heading == wanted {
        Arbitration::Unchanged
    } else if heading.is_opposite(wanted) {
        Arbitration::Reversal
    } else {
        let from = *heading;
        *heading = wanted;
        Arbitration::Adopted { from }
    }
}
