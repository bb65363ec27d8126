use std::{env, env::VarError};

/// There's no real CLI for the server, so just do quick 'n dirty
pub fn handle_command_line_args() -> bool {
    let has_cli_args = env::args().count() > 1;
    if has_cli_args {
        // We don't expect any CLI args, so always print the help
        display_readme();
        display_envs();
    }
    has_cli_args
}

fn display_readme() {
    const README: &str = include_str!("./cli-help.txt");
    println!("\n{README}\n");
}

fn display_envs() {
    // LOCUS_API_KEY is deliberately absent
    const DISPLAY_ENVS: [&str; 15] = [
        "RUST_LOG",
        "FTB_HOST",
        "FTB_PORT",
        "FTB_DATA_DIR",
        "FTB_CLEARING_PRICE",
        "FTB_REFUND_POLICY",
        "FTB_RESTAURANT_ID",
        "FTB_POOL_LOCATION",
        "FTB_POOL_FOOD_TYPE",
        "FTB_SETTLEMENT_AMOUNT",
        "FTB_SETTLEMENT_CURRENCY",
        "RESTAURANT_WALLET",
        "LOCUS_API_URL",
        "LOCUS_WALLET_ID",
        "LOCUS_TIMEOUT_SECS",
    ];

    println!("Current environment values (EXCLUDING variables that contain secrets):");
    DISPLAY_ENVS.iter().for_each(|&name| {
        let val = match env::var(name) {
            Ok(s) => s,
            Err(VarError::NotPresent) => "Not set".into(),
            Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
        };
        println!("  {name:<35} {val:<15}");
    })
}
