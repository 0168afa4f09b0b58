//! Door Lifecycle
//!
//! This example wires entry, exit and deactivate actions for a door and
//! runs them the way a state machine would while firing triggers.
//!
//! Key concepts:
//! - Blocking and async actions behind the same execute contract
//! - Entry actions scoped to a single trigger
//! - Async-only actions rejected on the blocking path
//!
//! Run with: cargo run --example door_lifecycle

use futures_util::FutureExt;
use mindset_actions::builder::StateActions;
use mindset_actions::core::Transition;
use mindset_actions::state_enum;
use serde_json::json;
use std::time::Duration;

state_enum! {
    enum Door {
        Closed,
        Open,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Door Lifecycle Example ===\n");

    let open = StateActions::builder(Door::Open)
        .on_entry(|transition, _| {
            println!("  entered {:?} via {:?}", transition.destination(), transition.trigger());
            Ok(())
        })
        .on_entry_from("kick", |_, args| {
            let force = args.first().cloned().unwrap_or_default();
            println!("  door was kicked with force {force}");
            Ok(())
        })
        .on_exit_async(|| {
            async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                println!("  closing slowly");
                Ok(())
            }
            .boxed()
        })
        .on_deactivate(|| {
            println!("  releasing door sensor");
            Ok(())
        })
        .build()
        .expect("door actions are valid");

    println!("Push open:");
    let push = Transition::new(Door::Closed, Door::Open, "push");
    open.execute_entry(&push).expect("entry actions are blocking");

    println!("\nKick open:");
    let kick = Transition::new(Door::Closed, Door::Open, "kick").with_args(vec![json!(9)]);
    open.execute_entry_async(&kick).await.expect("entry succeeds");

    println!("\nLeave on the blocking path:");
    match open.execute_exit() {
        Ok(()) => println!("  unexpected success"),
        Err(error) => println!("  rejected: {error}"),
    }

    println!("\nLeave on the async path:");
    open.execute_exit_async().await.expect("exit succeeds");
    open.execute_deactivate().expect("deactivate succeeds");

    println!("\n=== Example Complete ===");
}
