use std::env;
use std::fs;
use std::path::Path;

/// Variables que `config.rs` lee con `option_env!`
const CLAVES_CONFIG: &[&str] = &[
    "API_URL",
    "API_USERNAME",
    "API_PASSWORD",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "TOAST_LIFE_MS",
    "LANGUAGE",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for clave in CLAVES_CONFIG {
        println!("cargo:rerun-if-env-changed={}", clave);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Sin archivo .env, usando valores por defecto (API_URL=http://localhost:8080/api/persona)");
        return;
    };

    for (clave, valor) in contents.lines().filter_map(parse_linea) {
        if !CLAVES_CONFIG.iter().any(|k| *k == clave) {
            println!("cargo:warning=Clave desconocida en .env: {}", clave);
            continue;
        }
        // Una variable del entorno real tiene prioridad sobre .env
        if env::var(clave).is_err() {
            println!("cargo:rustc-env={}={}", clave, valor);
        }
    }
}

/// Parsear `CLAVE=valor`, ignorando comentarios, líneas vacías y comillas
fn parse_linea(linea: &str) -> Option<(&str, &str)> {
    let linea = linea.trim();
    if linea.is_empty() || linea.starts_with('#') {
        return None;
    }
    let (clave, valor) = linea.split_once('=')?;
    let valor = valor.trim().trim_matches('"');
    Some((clave.trim(), valor))
}
