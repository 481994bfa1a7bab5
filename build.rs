use std::env;
use std::fs;
use std::path::Path;

// Claves que la app lee con option_env! (ver src/config.rs)
const CONFIG_KEYS: &[&str] = &["PRODUCTS_API_URL", "ENVIRONMENT", "ENABLE_LOGGING", "LOG_LEVEL"];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                let Some((key, value)) = line.split_once('=') else {
                    println!("cargo:warning=Línea ignorada en .env: {}", line);
                    continue;
                };
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                if !CONFIG_KEYS.contains(&key) {
                    println!("cargo:warning=Clave desconocida en .env: {}", key);
                    continue;
                }

                // El entorno del proceso tiene prioridad sobre .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
