mod adapter;
mod cli;
mod domain;
mod error;
mod llm;
mod ports;
mod usecase;
mod wiring;


use std::io;
use std::process;
use std::sync::Arc;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::{RecurCommand, MARKER_PREFIX};
use error::Error;
use llm::resolver::{list_profiles, load_profiles_config};
use ports::inbound::UseCaseRunner;
use ports::outbound::{now_iso8601, LogLevel, LogRecord};
use usecase::{RecursivePromptUseCase, STDIN_REQUIRED_MSG};
use wiring::{build_completion, wire, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let verbose = config.verbose;
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                Some(m)
            },
        });

        let result = match cmd {
            RecurCommand::Help => {
                print_help();
                Ok(0)
            }
            RecurCommand::ListProfiles => {
                let cfg =
                    load_profiles_config(self.app.fs.as_ref(), self.app.env_resolver.as_ref())?;
                let (names, default) = list_profiles(cfg.as_ref());
                for name in &names {
                    if default.as_deref() == Some(name.as_str()) {
                        println!("{} (default)", name);
                    } else {
                        println!("{}", name);
                    }
                }
                Ok(0)
            }
            RecurCommand::Run { profile, model } => {
                // 端末チェックはプロバイダ構築より先（API キー未設定より STDIN の前提条件を優先）
                if self.app.prompt_source.is_interactive() {
                    Err(Error::invalid_argument(STDIN_REQUIRED_MSG))
                } else {
                    build_completion(&self.app, profile.as_ref(), model.as_ref()).and_then(
                        |completion| {
                            let usecase = RecursivePromptUseCase::new(
                                completion,
                                Arc::clone(&self.app.logger),
                                verbose,
                            );
                            let mut stdout = io::stdout();
                            usecase.run(self.app.prompt_source.as_ref(), &mut stdout)
                        },
                    )
                }
            }
        };

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command finished".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                m.insert("exit_code".to_string(), serde_json::json!(code));
                Some(m)
            },
        });
        if let Err(ref e) = result {
            let _ = self.app.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

fn cmd_name_for_log(cmd: &RecurCommand) -> &'static str {
    match cmd {
        RecurCommand::Help => "help",
        RecurCommand::ListProfiles => "list-profiles",
        RecurCommand::Run { .. } => "run",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            if e.is_usage() {
                eprintln!("Usage: recur [options] < prompt.txt (see 'recur --help')");
            }
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire();
    let runner = Runner { app };
    runner.run(config)
}

fn print_help() {
    println!("Usage: recur [options] < prompt.txt");
    println!("Options:");
    println!("  -h, --help               Show this help message");
    println!("  -L, --list-profiles      List currently available provider profiles (from profiles.json + built-ins)");
    println!("  -p, --profile <profile>  Specify provider profile (openai, chat, echo, etc.). Default: profiles.json default, or openai if not set.");
    println!("  -m, --model <model>      Specify model name (e.g. text-davinci-003, gpt-4o-mini). Default: profile default");
    println!("  -v, --verbose            Log each completion call to the JSONL log (for troubleshooting)");
    println!("  --generate <shell>       Generate shell completion script (bash, zsh, fish). Source the output to enable tab completion.");
    println!();
    println!("Environment:");
    println!("  OPENAI_API_KEY  API key for the completion endpoint (override the variable name per profile with api_key_env).");
    println!("  RECUR_HOME      Home directory. Profiles: $RECUR_HOME/config/profiles.json; log: $RECUR_HOME/log/recur.jsonl");
    println!("                  If unset, $XDG_CONFIG_HOME/recur (e.g. ~/.config/recur) is used.");
    println!();
    println!("Description:");
    println!("  Reads one line from STDIN and, while the text starts with the literal prefix");
    println!("  \"{}\", sends it to the completion endpoint and", MARKER_PREFIX);
    println!("  feeds each response back as the next prompt, printing:");
    println!();
    println!("      response #<n>: <text>");
    println!();
    println!("  The chain stops silently at the first response without the prefix.");
    println!();
    println!("Examples:");
    println!("  echo 'You are a recursive function. Call yourself with n-1.' | recur");
    println!("  recur -p chat -m gpt-4o-mini < prompt.txt");
    println!("  recur -p echo < prompt.txt");
}
