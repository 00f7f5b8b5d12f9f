//! Commit saga: the four writes of a craft and their compensations.
//!
//! Steps run in a fixed order (create item, record outcome, consume
//! reagents, deduct gold). Each completed step journals its undo; when a
//! later step fails the journal is replayed in reverse.

use alchemy_core::{ActorId, Category, InventoryItem, ItemData, ItemId, KnownOutcomes};
use tracing::{debug, error};

use crate::api::{CommitStage, Result, RuntimeError};
use crate::events::ConsumedReagent;
use crate::repository::{ActorRepository, RepositoryError};

/// Writes a craft has decided on.
pub(crate) struct CommitPlan<'a> {
    pub actor: ActorId,
    pub item: &'a ItemData,
    pub category: Category,
    pub sum: u32,
    /// Fresh reads of the slotted reagent stacks.
    pub reagents: &'a [InventoryItem],
    pub cost: u64,
}

pub(crate) struct Committed {
    pub item_id: ItemId,
    pub newly_discovered: bool,
    pub consumed: Vec<ConsumedReagent>,
    pub balance: u64,
}

enum Undo {
    DeleteItem(ItemId),
    RestoreLedger(KnownOutcomes),
    RestoreQuantity { item: ItemId, quantity: u32 },
    RestoreItem { item: ItemId, data: ItemData },
    RestoreCurrency(u64),
}

type StepResult<T> = std::result::Result<T, (CommitStage, RepositoryError)>;

pub(crate) async fn commit(repo: &dyn ActorRepository, plan: CommitPlan<'_>) -> Result<Committed> {
    let mut journal = Vec::new();
    match run(repo, &plan, &mut journal).await {
        Ok(committed) => Ok(committed),
        Err((stage, source)) => {
            error!(actor = %plan.actor, %stage, error = %source, "craft commit step failed, rolling back");
            let unreconciled = compensate(repo, plan.actor, journal).await;
            Err(RuntimeError::Commit {
                stage,
                source,
                rolled_back: unreconciled.is_empty(),
                unreconciled,
            })
        }
    }
}

async fn run(repo: &dyn ActorRepository, plan: &CommitPlan<'_>, journal: &mut Vec<Undo>) -> StepResult<Committed> {
    let actor = plan.actor;

    let item_id = repo
        .create_item(actor, plan.item)
        .await
        .map_err(|e| (CommitStage::CreateItem, e))?;
    journal.push(Undo::DeleteItem(item_id));
    debug!(%actor, %item_id, "crafted item created");

    let stage = CommitStage::RecordOutcome;
    let mut ledger = repo.known_outcomes(actor).await.map_err(|e| (stage, e))?;
    let previous = ledger.clone();
    let newly_discovered = ledger.record(plan.category, plan.sum, item_id);
    if newly_discovered {
        repo.set_known_outcomes(actor, &ledger)
            .await
            .map_err(|e| (stage, e))?;
        journal.push(Undo::RestoreLedger(previous));
        debug!(%actor, category = %plan.category, sum = plan.sum, "outcome discovered");
    }

    let stage = CommitStage::ConsumeReagents;
    let mut consumed = Vec::with_capacity(plan.reagents.len());
    for reagent in plan.reagents {
        let quantity = reagent.data.quantity;
        if quantity > 1 {
            repo.update_item_quantity(actor, reagent.id, quantity - 1)
                .await
                .map_err(|e| (stage, e))?;
            journal.push(Undo::RestoreQuantity {
                item: reagent.id,
                quantity,
            });
        } else {
            repo.delete_item(actor, reagent.id)
                .await
                .map_err(|e| (stage, e))?;
            journal.push(Undo::RestoreItem {
                item: reagent.id,
                data: reagent.data.clone(),
            });
        }
        consumed.push(ConsumedReagent {
            item: reagent.id,
            remaining: quantity.saturating_sub(1),
        });
    }

    let stage = CommitStage::DeductCurrency;
    let balance = repo.currency(actor).await.map_err(|e| (stage, e))?;
    if balance < plan.cost {
        return Err((
            stage,
            RepositoryError::Conflict(format!("balance of {balance} gp is below the cost of {} gp", plan.cost)),
        ));
    }
    let remaining = balance - plan.cost;
    repo.set_currency(actor, remaining)
        .await
        .map_err(|e| (stage, e))?;
    journal.push(Undo::RestoreCurrency(balance));

    Ok(Committed {
        item_id,
        newly_discovered,
        consumed,
        balance: remaining,
    })
}

/// Replays the journal backwards; returns descriptions of undos that failed.
async fn compensate(repo: &dyn ActorRepository, actor: ActorId, journal: Vec<Undo>) -> Vec<String> {
    let mut unreconciled = Vec::new();
    for undo in journal.into_iter().rev() {
        let (what, outcome) = match undo {
            Undo::RestoreCurrency(balance) => (
                format!("restore balance to {balance} gp"),
                repo.set_currency(actor, balance).await,
            ),
            Undo::RestoreItem { item, data } => (
                format!("restore consumed reagent {} as {item}", data.name),
                repo.restore_item(actor, item, &data).await,
            ),
            Undo::RestoreQuantity { item, quantity } => (
                format!("restore {item} quantity to {quantity}"),
                repo.update_item_quantity(actor, item, quantity).await,
            ),
            Undo::RestoreLedger(ledger) => (
                "restore known outcomes".to_string(),
                repo.set_known_outcomes(actor, &ledger).await,
            ),
            Undo::DeleteItem(item) => (
                format!("delete crafted {item}"),
                repo.delete_item(actor, item).await,
            ),
        };
        match outcome {
            Ok(()) => debug!(%actor, "compensated: {what}"),
            Err(e) => {
                error!(%actor, error = %e, "compensation failed: {what}");
                unreconciled.push(format!("{what}: {e}"));
            }
        }
    }
    unreconciled
}
