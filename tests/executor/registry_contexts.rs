//! Registry Context Tests
//!
//! Every block context resolves to its own table; only the general table is
//! populated by default.

use std::sync::Arc;

use wmctl::{
    BlockContext, CommandResult, Error, Executor, InterpreterConfig, Registry, ServerState,
};

fn bar_position(state: &mut ServerState, args: &[String]) -> CommandResult {
    if let Some(error) = wmctl::checkarg(args.len(), "position", wmctl::ExpectedArgs::EqualTo, 1) {
        return error;
    }
    state.exec_queue.push(wmctl::ExecRequest {
        command: format!("bar position {}", args[0]),
        always: true,
    });
    CommandResult::success()
}

fn executor_in(registry: Arc<Registry>, context: BlockContext) -> Executor {
    Executor::with_config(
        registry,
        InterpreterConfig {
            context,
            ..InterpreterConfig::default()
        },
    )
}

#[test]
fn builtin_contexts_other_than_general_are_empty() {
    let registry = Registry::shared();
    for context in BlockContext::ALL {
        let found = registry.lookup("exit", context).is_some();
        let expected = matches!(context, BlockContext::General | BlockContext::End);
        assert_eq!(found, expected, "context {}", context);
    }
}

#[test]
fn dispatch_in_empty_context_is_structured_failure() {
    let executor = executor_in(Registry::shared(), BlockContext::IpcEvents);
    let result = executor.execute(&mut ServerState::new(), "exit");
    assert_eq!(result, CommandResult::unknown_command("exit"));
}

#[test]
fn custom_block_table_is_used_only_in_its_context() {
    let registry = Arc::new(
        Registry::builder()
            .with_builtins()
            .register(BlockContext::Bar, "position", bar_position)
            .build()
            .unwrap(),
    );

    let bar = executor_in(Arc::clone(&registry), BlockContext::Bar);
    let mut state = ServerState::new();
    assert!(bar.execute(&mut state, "position top").is_success());
    assert_eq!(state.exec_queue[0].command, "bar position top");
    // General commands are not visible inside the bar block.
    assert!(!bar.execute(&mut state, "exit").is_success());

    let top = executor_in(registry, BlockContext::End);
    assert!(!top.execute(&mut state, "position top").is_success());
}

#[test]
fn duplicate_registration_is_rejected() {
    let err = Registry::builder()
        .register(BlockContext::Input, "tap", bar_position)
        .register(BlockContext::Input, "TAP", bar_position)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateHandler { context: BlockContext::Input, .. }));
}
