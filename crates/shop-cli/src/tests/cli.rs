use crate::{CartCommands, Cli, Commands, QuestionCommands};

use clap::Parser;

#[test]
fn test_login_parses_credentials() {
    let cli = Cli::try_parse_from([
        "shop",
        "login",
        "--username",
        "alice",
        "--password",
        "pw1",
    ])
    .unwrap();

    match cli.command {
        Commands::Login { username, password } => {
            assert_eq!(username, "alice");
            assert_eq!(password, "pw1");
        }
        _ => panic!("Expected Login"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "shop",
        "cart",
        "get",
        "--pretty",
        "--server",
        "http://localhost:9000/api",
    ])
    .unwrap();

    assert!(cli.pretty);
    assert_eq!(cli.server.as_deref(), Some("http://localhost:9000/api"));
    assert!(matches!(
        cli.command,
        Commands::Cart {
            action: CartCommands::Get
        }
    ));
}

#[test]
fn test_cart_add_user_id_optional() {
    let cli = Cli::try_parse_from(["shop", "cart", "add"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Cart {
            action: CartCommands::Add { user_id: None }
        }
    ));

    let cli = Cli::try_parse_from(["shop", "cart", "add", "--user-id", "7"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Cart {
            action: CartCommands::Add { user_id: Some(7) }
        }
    ));
}

#[test]
fn test_question_ask_requires_content() {
    assert!(Cli::try_parse_from(["shop", "question", "ask", "42"]).is_err());

    let cli =
        Cli::try_parse_from(["shop", "question", "ask", "42", "--content", "Waterproof?"]).unwrap();
    match cli.command {
        Commands::Question {
            action: QuestionCommands::Ask {
                product_id,
                content,
            },
        } => {
            assert_eq!(product_id, "42");
            assert_eq!(content, "Waterproof?");
        }
        _ => panic!("Expected Question Ask"),
    }
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(["shop", "checkout"]).is_err());
}
