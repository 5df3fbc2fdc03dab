//! Scheduler for periodic member tracking updates.
//!
//! Jobs run on cron expressions through `tokio-cron-scheduler`. Each job is single-instance:
//! if a run is still in progress when the next tick fires, that tick is skipped so runs never
//! overlap.

use std::{fmt::Display, future::Future, sync::Arc};

use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, model::app::AppState, task::member_tracking::update_member_tracking};

/// Job scheduler for background member tracking tasks.
pub struct Scheduler {
    state: AppState,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(state: AppState) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { state, sched })
    }

    /// Registers the member tracking job and starts the scheduler.
    ///
    /// # Arguments
    /// - `member_tracking_cron` - Cron expression of the member tracking job
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Job registered and scheduler started, keep it alive to keep running jobs
    /// - `Err(Error)` - Invalid cron expression or the scheduler failed to start
    pub async fn start(mut self, member_tracking_cron: &str) -> Result<Self, Error> {
        self.schedule_job(member_tracking_cron, "member tracking", |state| async move {
            update_member_tracking(&state).await
        })
        .await?;

        self.sched.start().await?;

        Ok(self)
    }

    /// Stops all jobs.
    pub async fn shutdown(mut self) -> Result<(), Error> {
        self.sched.shutdown().await?;

        Ok(())
    }

    /// Schedules a recurring single-instance job with the specified cron expression.
    ///
    /// # Arguments
    /// - `cron` - Cron expression with seconds, e.g. "0 0 */6 * * *" for every 6 hours
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async function running the job, its summary is logged on success
    pub async fn schedule_job<F, Fut, R>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(AppState) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, Error>> + Send + 'static,
        R: Display,
    {
        let state = self.state.clone();
        let name = name.to_string();
        let function = Arc::new(function);
        let running = Arc::new(Mutex::new(()));

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let state = state.clone();
                let name = name.clone();
                let function = Arc::clone(&function);
                let running = Arc::clone(&running);

                Box::pin(async move {
                    run_exclusive(&running, &name, function(state)).await;
                })
            })?)
            .await?;

        Ok(())
    }
}

/// Runs the job unless a previous run still holds `running`.
///
/// Returns false if the run was skipped.
pub(crate) async fn run_exclusive<Fut, R>(running: &Mutex<()>, name: &str, job: Fut) -> bool
where
    Fut: Future<Output = Result<R, Error>>,
    R: Display,
{
    let Ok(_guard) = running.try_lock() else {
        tracing::warn!("Skipping {} run, the previous run is still in progress", name);
        return false;
    };

    match job.await {
        Ok(summary) => tracing::info!("Finished {} run: {}", name, summary),
        Err(e) => e.log(&format!("Failed {} run", name)),
    }

    true
}
