//! Scoreboard session.
//!
//! [`Scoreboard`] owns the one [`AssetLedger`] of a session and wires it to
//! storage and to the event bus. Every mutation follows the same sequence:
//! validate and apply on the ledger, persist the new record, publish
//! `assetChanged`, then publish `scoreChanged` with the recomputed total.
//! Widgets never see the ledger; they subscribe to the bus.

use ledger_core::{
    Asset, AssetLedger, AssetSnapshot, IncrementOutcome, LedgerConfig, RestoreSource, Restored,
};

use crate::api::{Command, Result};
use crate::config::ScoreboardConfig;
use crate::events::{Event, EventBus, EventKind, SubscriptionHandle};
use crate::gateway::PersistenceGateway;
use crate::repository::{FileLedgerRepository, InMemoryLedgerRepo, LedgerRepository, validate_key};

pub struct Scoreboard {
    ledger: AssetLedger,
    gateway: PersistenceGateway,
    bus: EventBus,
}

impl Scoreboard {
    /// Create a new scoreboard builder
    pub fn builder() -> ScoreboardBuilder {
        ScoreboardBuilder::new()
    }

    /// Restores the ledger through `gateway` and attaches it to `bus`.
    ///
    /// A missing record starts from the defaults. A malformed record also
    /// starts from the defaults, and the default record is written back so
    /// the next session starts clean.
    pub fn open(gateway: PersistenceGateway, bus: EventBus, config: LedgerConfig) -> Self {
        let stored = gateway.load_persisted();
        let Restored { ledger, source } = AssetLedger::restore(stored.as_deref(), config);

        match source {
            RestoreSource::Defaults => {
                tracing::info!("No stored ledger; starting from defaults");
            }
            RestoreSource::Persisted(report) => {
                if !report.ignored.is_empty() {
                    tracing::warn!("Ignored unknown keys in stored ledger: {:?}", report.ignored);
                }
                if !report.rejected.is_empty() {
                    tracing::warn!(
                        "Non-integer values in stored ledger reset to defaults: {:?}",
                        report.rejected
                    );
                }
                if !report.missing.is_empty() {
                    tracing::debug!("Stored ledger lacks {:?}; using defaults", report.missing);
                }
                tracing::info!("Restored ledger from {:?}", gateway.storage_key());
            }
            RestoreSource::Recovered(err) => {
                tracing::warn!("Stored ledger is unreadable ({}); reset to defaults", err);
                gateway.persist(&ledger);
            }
        }

        Self {
            ledger,
            gateway,
            bus,
        }
    }

    pub fn get(&self, asset: Asset) -> i64 {
        self.ledger.get(asset)
    }

    pub fn get_named(&self, name: &str) -> Result<i64> {
        Ok(self.ledger.get_named(name)?)
    }

    /// Owned copy of every counter.
    pub fn get_all(&self) -> AssetSnapshot {
        self.ledger.get_all()
    }

    pub fn derived_score(&self) -> i64 {
        self.ledger.derived_score()
    }

    /// Read-only view of the ledger.
    pub fn ledger(&self) -> &AssetLedger {
        &self.ledger
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn storage_key(&self) -> &str {
        self.gateway.storage_key()
    }

    /// Overwrites a counter, then persists and notifies.
    pub fn set(&mut self, asset: Asset, value: i64) {
        self.ledger.set(asset, value);
        self.commit(asset);
    }

    pub fn set_named(&mut self, name: &str, value: i64) -> Result<Asset> {
        let asset = Asset::parse(name)?;
        self.set(asset, value);
        Ok(asset)
    }

    /// Adds `delta` to a counter under the ledger's floor rule.
    ///
    /// Only an applied change is persisted and announced; a rejected
    /// decrement leaves storage and subscribers untouched.
    pub fn increment(&mut self, asset: Asset, delta: i64) -> Result<IncrementOutcome> {
        let outcome = self.ledger.increment(asset, delta)?;
        if outcome.is_applied() {
            self.commit(asset);
        } else {
            tracing::debug!(
                "Rejected {} {:+} at {}: would go below zero",
                asset,
                delta,
                outcome.value()
            );
        }
        Ok(outcome)
    }

    pub fn increment_named(&mut self, name: &str, delta: i64) -> Result<IncrementOutcome> {
        let asset = Asset::parse(name)?;
        self.increment(asset, delta)
    }

    /// Restores the default board.
    ///
    /// The stored record is discarded and replaced by the defaults, then every
    /// asset and the score are announced.
    pub fn reset(&mut self) {
        self.gateway.discard();
        self.ledger.reset();
        self.gateway.persist(&self.ledger);
        tracing::info!("Ledger reset to defaults");
        self.announce();
    }

    /// Publishes the current value of every asset, then the score.
    ///
    /// Lets widgets created after the session opened draw their first value.
    pub fn announce(&self) {
        for asset in Asset::all() {
            self.bus.publish(Event::AssetChanged {
                asset,
                value: self.ledger.get(asset),
            });
        }
        self.publish_score();
    }

    /// Applies a control-surface request; returns whether the ledger changed.
    pub fn execute(&mut self, command: Command) -> Result<bool> {
        tracing::debug!("Executing {:?}", command);
        match command {
            Command::Increment { asset, amount } => {
                Ok(self.increment(asset, amount)?.is_applied())
            }
            Command::Set { asset, value } => {
                self.set(asset, value);
                Ok(true)
            }
            Command::Reset => {
                self.reset();
                Ok(true)
            }
        }
    }

    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> SubscriptionHandle
    where
        F: FnMut(&Event) + 'static,
    {
        self.bus.subscribe(kind, handler)
    }

    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        self.bus.unsubscribe(handle)
    }

    fn commit(&self, asset: Asset) {
        let value = self.ledger.get(asset);
        self.gateway.persist(&self.ledger);
        self.bus.publish(Event::AssetChanged { asset, value });
        self.publish_score();
    }

    fn publish_score(&self) {
        self.bus.publish(Event::ScoreChanged {
            value: self.ledger.derived_score(),
        });
    }
}

/// Builder for [`Scoreboard`].
///
/// Without an explicit repository the session stores its record in a file
/// under the configured data directory, or in memory when persistence is
/// disabled. Without an explicit bus it creates its own.
pub struct ScoreboardBuilder {
    config: ScoreboardConfig,
    repository: Option<Box<dyn LedgerRepository>>,
    bus: Option<EventBus>,
}

impl ScoreboardBuilder {
    fn new() -> Self {
        Self {
            config: ScoreboardConfig::default(),
            repository: None,
            bus: None,
        }
    }

    /// Override scoreboard configuration
    pub fn config(mut self, config: ScoreboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject the storage backend
    pub fn repository(mut self, repository: impl LedgerRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Share an existing bus (widgets may already be subscribed)
    pub fn bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn build(self) -> Result<Scoreboard> {
        let Self {
            config,
            repository,
            bus,
        } = self;

        validate_key(&config.storage_key)?;

        let repository: Box<dyn LedgerRepository> = match repository {
            Some(repository) => repository,
            None if config.enable_persistence => {
                let data_dir = config.resolved_data_dir();
                tracing::debug!("Storing ledger under {}", data_dir.display());
                Box::new(FileLedgerRepository::new(data_dir)?)
            }
            None => {
                tracing::debug!("Persistence disabled; using in-memory storage");
                Box::new(InMemoryLedgerRepo::new())
            }
        };

        let gateway = PersistenceGateway::from_boxed(repository, config.storage_key);
        Ok(Scoreboard::open(gateway, bus.unwrap_or_default(), config.ledger))
    }
}
