//! Demo command tree driven by the binary

use prompter::{exit_command, CmdArgs, CmdOption, Command, Completer, Context, Error, FixedValues, Result};

/// Build the demo tree: `hello`, `say foo`, `greet --name`, `config` and `exit`.
pub(crate) fn build_tree() -> Result<Completer> {
    let mut tree = Completer::new();
    tree.register_commands([
        Command::leaf("hello", "print hello world", |_: &CmdArgs, _: &mut Context| {
            println!("Hello World");
            Ok(())
        }),
        say_command(),
        greet_command(),
        config_command(),
        exit_command("exit", "exit the application"),
    ])?;
    Ok(tree)
}

fn say_command() -> Command {
    Command::new("say", "say some words").with_subcommands([Command::leaf(
        "foo",
        "say foo",
        |_: &CmdArgs, _: &mut Context| {
            println!("Prompter says \"foo\"");
            Ok(())
        },
    )])
}

fn greet_command() -> Command {
    Command::leaf("greet", "say a greeting", greet).with_option(
        CmdOption::new("--name", "your name")
            .with_completer(FixedValues::from_texts(["alice", "bob", "charles"])),
    )
}

fn greet(args: &CmdArgs, _: &mut Context) -> Result<()> {
    if !args.contains("--name") {
        return Err(Error::command("must provide a name"));
    }
    println!("Hello to {}", args.first_value("--name")?);
    Ok(())
}

fn config_command() -> Command {
    Command::new("config", "inspect session settings").with_subcommands([
        Command::leaf("set", "set a key to a value", |args: &CmdArgs, ctx: &mut Context| {
            let key = args.get_value(prompter::POSITIONAL, 1)?;
            let value = args.get_value(prompter::POSITIONAL, 2)?;
            ctx.config.set(key, value);
            Ok(())
        }),
        Command::leaf("get", "print the value of a key", |args: &CmdArgs, ctx: &mut Context| {
            let key = args.get_value(prompter::POSITIONAL, 1)?;
            println!("{}", ctx.config.key(key));
            Ok(())
        }),
        Command::leaf("export", "print all settings as JSON", |_: &CmdArgs, ctx: &mut Context| {
            let json = ctx.config.export()?;
            println!("{}", String::from_utf8_lossy(&json));
            Ok(())
        }),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        prompter::split_command_words(line)
    }

    fn texts(tree: &Completer, input: &str) -> Vec<String> {
        tree.complete(input).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_build_tree_top_level() {
        let tree = build_tree().unwrap();
        assert_eq!(texts(&tree, "s"), vec!["say"]);
        assert_eq!(texts(&tree, "e"), vec!["exit"]);
    }

    #[test]
    fn test_greet_name_values() {
        let tree = build_tree().unwrap();
        assert_eq!(texts(&tree, "greet --name "), vec!["alice", "bob", "charles"]);
    }

    #[test]
    fn test_greet_without_name_fails() {
        let tree = build_tree().unwrap();
        let mut ctx = Context::new();
        let result = tree.dispatch(&words("greet"), &mut ctx).unwrap();
        assert!(result.unwrap_err().to_string().contains("must provide a name"));
    }

    #[test]
    fn test_say_alone_is_incomplete() {
        let tree = build_tree().unwrap();
        let mut ctx = Context::new();
        assert!(tree.dispatch(&words("say"), &mut ctx).is_none());
        assert!(tree.dispatch(&words("say foo"), &mut ctx).unwrap().is_ok());
    }

    #[test]
    fn test_config_set_then_get() {
        let tree = build_tree().unwrap();
        let mut ctx = Context::new();
        tree.dispatch(&words("config set user \"Alice Smith\""), &mut ctx)
            .unwrap()
            .unwrap();
        assert_eq!(ctx.config.key("user"), "Alice Smith");
    }

    #[test]
    fn test_exit_requests_stop() {
        let tree = build_tree().unwrap();
        let mut ctx = Context::new();
        tree.dispatch(&words("exit"), &mut ctx).unwrap().unwrap();
        assert_eq!(ctx.exit_status(), Some(0));
    }
}
