use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;

/// Where the data files live and which port to serve on.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub measurement_csv: PathBuf,
    pub nutrition_csv: PathBuf,
    pub articles_json: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT),
            measurement_csv: path_var("MEASUREMENT_CSV_PATH", "data/Measurement-Summary.csv"),
            nutrition_csv: path_var("NUTRITION_CSV_PATH", "data/Nutrition-Summary.csv"),
            articles_json: path_var("ARTICLES_JSON_PATH", "data/data.json"),
        }
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
