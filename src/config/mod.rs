use std::env;
use std::path::PathBuf;

const DEFAULT_MODEL_PATH: &str = "backend/model.json";
const DEFAULT_DATASET_PATH: &str = "placement.csv";
const DEFAULT_FRONTEND_DIR: &str = "frontend";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Trained classifier artifact (optional, demo mode when absent or broken)
    pub model_path: PathBuf,

    // Dataset backing /api/stats (optional, demo stats when absent)
    pub dataset_path: PathBuf,

    // Static frontend
    pub frontend_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {e}"))?,
            model_path: path_var("MODEL_PATH", DEFAULT_MODEL_PATH),
            dataset_path: path_var("DATASET_PATH", DEFAULT_DATASET_PATH),
            frontend_dir: path_var("FRONTEND_DIR", DEFAULT_FRONTEND_DIR),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            model_path: DEFAULT_MODEL_PATH.into(),
            dataset_path: DEFAULT_DATASET_PATH.into(),
            frontend_dir: DEFAULT_FRONTEND_DIR.into(),
        }
    }
}

fn path_var(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.into())
        .into()
}
