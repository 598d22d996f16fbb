use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::error::Result;

/// One request's worth of writes.
///
/// Every mutation in [`crate::services::booking`] takes a `&UnitOfWork`
/// instead of a shared connection, so a handler decides where the
/// transaction starts and ends. [`UnitOfWork::finish`] commits on `Ok` and
/// rolls back on `Err`; a unit of work that is dropped without finishing is
/// rolled back by the underlying transaction.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
    operation: &'static str,
}

impl UnitOfWork {
    pub async fn begin(db: &DatabaseConnection, operation: &'static str) -> Result<Self> {
        let txn = db.begin().await?;
        tracing::debug!(operation, "Unit of work started");
        Ok(Self { txn, operation })
    }

    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub async fn commit(self) -> Result<()> {
        let operation = self.operation;
        self.txn.commit().await?;
        tracing::debug!(operation, "Unit of work committed");
        Ok(())
    }

    pub async fn rollback(self) -> Result<()> {
        let operation = self.operation;
        self.txn.rollback().await?;
        tracing::debug!(operation, "Unit of work rolled back");
        Ok(())
    }

    /// Commit or roll back depending on `outcome`, returning it.
    ///
    /// A failed rollback is logged but the original error is what the caller
    /// sees.
    pub async fn finish<T>(self, outcome: Result<T>) -> Result<T> {
        match outcome {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(err) => {
                let operation = self.operation;
                tracing::warn!(operation, error = %err, "Rolling back unit of work");
                if let Err(rollback_err) = self.rollback().await {
                    tracing::error!(operation, error = %rollback_err, "Rollback failed");
                }
                Err(err)
            }
        }
    }
}
