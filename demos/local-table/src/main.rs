//! A table that plays itself: one scripted player plus three bots run
//! a full round in-process, with every notification printed as it
//! arrives. Useful for watching the phase flow without a client.

use std::time::Duration;

use tokio::sync::mpsc;

use chameleon_protocol::{Action, ConnId, Notification};
use chameleon_server::{Pacing, Registry, init_tracing};

/// Short but watchable delays.
fn demo_pacing() -> Pacing {
    Pacing {
        role_reveal: Duration::from_secs(1),
        secret_reveal: Duration::from_secs(1),
        bot_think_min: Duration::from_millis(500),
        bot_think_max: Duration::from_millis(1500),
        vote_window: Duration::from_secs(10),
        guess_window: Duration::from_secs(5),
        ..Pacing::default()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let registry = Registry::new(demo_pacing());
    let host_conn = ConnId::new("demo-host");
    let (tx, mut rx) = mpsc::unbounded_channel();

    let code = registry.create_room(host_conn.clone(), "Demo", tx).await?;
    println!("room {code} created");

    for _ in 0..3 {
        registry
            .act(&host_conn, Action::AddBot { code: code.clone() })
            .await?;
    }
    registry
        .act(
            &host_conn,
            Action::UpdateConfig {
                code: code.clone(),
                patch: chameleon_protocol::ConfigPatch {
                    turn_secs: Some(5),
                    discussion_secs: Some(3),
                    ..Default::default()
                },
            },
        )
        .await?;
    registry
        .act(&host_conn, Action::StartGame { code: code.clone() })
        .await?;

    // Our player needs to act on their own turn and vote; everything
    // else runs off bots and timers.
    let me = loop {
        match rx.recv().await.ok_or("channel closed")? {
            Notification::RoomCreated { player, .. } => break player,
            other => println!("{other:?}"),
        }
    };

    while let Some(notification) = rx.recv().await {
        println!("{notification:?}");
        match notification {
            Notification::CluePhaseStarted { current, .. } if current == me => {
                registry
                    .act(
                        &host_conn,
                        Action::SubmitClue {
                            code: code.clone(),
                            word: "hmm".into(),
                        },
                    )
                    .await?;
            }
            Notification::NextTurn { player, .. } if player == me => {
                registry
                    .act(
                        &host_conn,
                        Action::SubmitClue {
                            code: code.clone(),
                            word: "maybe".into(),
                        },
                    )
                    .await?;
            }
            Notification::VotingStarted => {
                // Vote for whoever gave the first clue that wasn't us.
                // Crude, but the demo is about the flow, not strategy.
                registry
                    .act(&host_conn, Action::GetState { code: code.clone() })
                    .await?;
            }
            Notification::State { game: Some(view), .. } => {
                if let Some(entry) = view.clues.iter().find(|c| c.player != me) {
                    registry
                        .act(
                            &host_conn,
                            Action::SubmitVote {
                                code: code.clone(),
                                target: entry.player,
                            },
                        )
                        .await?;
                }
            }
            Notification::RoundResults { .. } => {
                registry
                    .act(&host_conn, Action::EndGame { code: code.clone() })
                    .await?;
            }
            Notification::GameEnded { scores, .. } => {
                println!("final scores: {scores:?}");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}
