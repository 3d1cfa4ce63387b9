//! Application state shared by all handlers
//!
//! Everything here is cheap to clone: the pool and JWT keys are `Arc`ed
//! internally and the config sits behind an `Arc`.

use crate::auth::JwtService;
use crate::config::AppConfig;
use fitness_coach_shared::{Coach, CoachSettings};
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub jwt: JwtService,
    /// Report builder configured from `coach` settings
    pub coach: Coach,
    /// Present when the Prometheus recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry_secs);
        let coach = Coach::new(CoachSettings {
            hydration_target_ml: config.coach.hydration_target_ml,
        });

        Self {
            db,
            config: Arc::new(config),
            jwt,
            coach,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    #[inline]
    pub fn coach(&self) -> &Coach {
        &self.coach
    }

    pub fn report_timeout(&self) -> Duration {
        Duration::from_secs(self.config.coach.report_timeout_secs)
    }
}
