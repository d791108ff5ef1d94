use crate::messages::tracking_messages::*;
use crate::tracker_actors::tracking_manager::TrackingManager;
use actix::fut::wrap_future;
use actix::prelude::*;
use common::errors::UnknownStatus;
use common::logger::Logger;
use common::types::delivery_status::DeliveryStatus;
use std::io::{self, BufRead, BufReader};
use std::sync::Arc;
use std::thread;
use thiserror::Error;
use tokio::sync::Notify;
use uuid::Uuid;

/// Commands understood by the test panel, one per input line.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    Start {
        order_id: String,
        customer_name: String,
    },
    Test,
    Next,
    Stop,
    Status(DeliveryStatus),
    Info,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', type 'help' for the list")]
    Unknown(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Status(#[from] UnknownStatus),
}

pub fn parse_command(line: &str) -> Result<UiCommand, CommandError> {
    let mut words = line.split_whitespace();
    let command = words.next().ok_or(CommandError::Empty)?;

    match command.to_lowercase().as_str() {
        "start" => {
            let order_id = words
                .next()
                .map(str::to_string)
                .unwrap_or_else(new_order_id);
            let customer_name = words.collect::<Vec<_>>().join(" ");
            Ok(UiCommand::Start {
                order_id,
                customer_name,
            })
        }
        "test" => Ok(UiCommand::Test),
        "next" => Ok(UiCommand::Next),
        "stop" => Ok(UiCommand::Stop),
        "status" => {
            let name = words.next().ok_or(CommandError::MissingArgument("status"))?;
            Ok(UiCommand::Status(name.parse()?))
        }
        "info" => Ok(UiCommand::Info),
        "help" => Ok(UiCommand::Help),
        "quit" | "exit" => Ok(UiCommand::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Short random id used when `start` is given no order id.
fn new_order_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}

fn describe(snapshot: &TrackingSnapshot) -> String {
    match &snapshot.activity_id {
        Some(activity_id) => format!(
            "Live activity {} active: step {}/{}, showing {} (ETA {})",
            activity_id,
            snapshot.current_step,
            snapshot.last_step,
            snapshot.current_state.status,
            snapshot.current_state.estimated_time
        ),
        None => "No live activity active".to_string(),
    }
}

/// Actor UIHandler: panel de pruebas por consola.
pub struct UIHandler {
    /// Canal de envío hacia el actor `TrackingManager`
    pub manager: Addr<TrackingManager>,
    /// Avisa a `main` que el usuario pidió salir.
    pub shutdown: Arc<Notify>,
    /// Fuente de comandos, leída en un hilo propio al arrancar el actor.
    pub input: Option<Box<dyn BufRead + Send>>,
    pub logger: Logger,
}

/// A line typed on the panel.
pub struct InputLine(pub String);

impl Message for InputLine {
    type Result = ();
}

/// The panel input reached its end or failed.
pub struct InputClosed;

impl Message for InputClosed {
    type Result = ();
}

impl UIHandler {
    pub fn new(manager: Addr<TrackingManager>, shutdown: Arc<Notify>, logger: Logger) -> Self {
        UIHandler {
            manager,
            shutdown,
            input: Some(Box::new(BufReader::new(io::stdin()))),
            logger,
        }
    }

    /// Reads commands from `input` instead of stdin.
    pub fn with_input(mut self, input: impl BufRead + Send + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    /// Blocking reads run on a plain thread: the runtime never waits on them,
    /// so shutting down does not depend on the input producing another line.
    fn spawn_reader(&self, input: Box<dyn BufRead + Send>, addr: Addr<Self>) {
        let logger = self.logger.clone();
        thread::spawn(move || {
            for line in input.lines() {
                match line {
                    Ok(line) => addr.do_send(InputLine(line)),
                    Err(e) => {
                        logger.error(format!("Error while reading input: {}", e));
                        break;
                    }
                }
            }
            addr.do_send(InputClosed);
        });
    }

    fn print_help(&self) {
        self.logger.info("Commands:");
        self.logger
            .info("  start [order_id] [customer name]  start tracking an order");
        self.logger
            .info("  test                              start the test delivery");
        self.logger
            .info("  next                              jump to the next step");
        self.logger.info(format!(
            "  status <{}>",
            DeliveryStatus::ALL.map(|s| s.as_str()).join("|")
        ));
        self.logger
            .info("  stop                              stop tracking");
        self.logger
            .info("  info                              show the current session");
        self.logger.info("  quit");
    }

    fn run_command(&self, command: UiCommand, ctx: &mut Context<Self>) {
        match command {
            UiCommand::Start {
                order_id,
                customer_name,
            } => self.manager.do_send(StartTracking {
                order_id,
                customer_name,
            }),
            UiCommand::Test => self.manager.do_send(StartTestDelivery),
            UiCommand::Next => self.manager.do_send(UpdateToNextStep),
            UiCommand::Stop => self.manager.do_send(StopTracking),
            UiCommand::Status(status) => self.manager.do_send(UpdateToStatus { status }),
            UiCommand::Info => {
                let manager = self.manager.clone();
                let logger = self.logger.clone();
                ctx.spawn(wrap_future(async move {
                    match manager.send(GetSnapshot).await {
                        Ok(snapshot) => logger.info(describe(&snapshot)),
                        Err(e) => logger.error(format!("TrackingManager unreachable: {}", e)),
                    }
                }));
            }
            UiCommand::Help => self.print_help(),
            UiCommand::Quit => {
                self.logger.info("Bye!");
                self.shutdown.notify_one();
            }
        }
    }
}

impl Actor for UIHandler {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.logger.info("UIHandler iniciado!");
        self.print_help();
        if let Some(input) = self.input.take() {
            self.spawn_reader(input, ctx.address());
        }
    }
}

impl Handler<InputLine> for UIHandler {
    type Result = ();

    fn handle(&mut self, msg: InputLine, ctx: &mut Self::Context) -> Self::Result {
        match parse_command(&msg.0) {
            Ok(command) => self.run_command(command, ctx),
            Err(CommandError::Empty) => {}
            Err(e) => self.logger.warn(e.to_string()),
        }
    }
}

impl Handler<InputClosed> for UIHandler {
    type Result = ();

    fn handle(&mut self, _msg: InputClosed, ctx: &mut Self::Context) -> Self::Result {
        self.logger
            .warn("Input closed, the simulation keeps running until Ctrl-C");
        ctx.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::live_activity::console::ConsoleActivityCenter;
    use crate::shutdown::wait_for_shutdown;
    use colored::Color;
    use common::config::TrackerConfig;
    use std::io::Read;
    use std::sync::mpsc;
    use std::time::Duration;

    /// Input that blocks forever without producing a line, like an idle terminal.
    struct IdleInput {
        _sender: mpsc::Sender<()>,
        receiver: mpsc::Receiver<()>,
    }

    impl IdleInput {
        fn new() -> Self {
            let (sender, receiver) = mpsc::channel();
            IdleInput {
                _sender: sender,
                receiver,
            }
        }
    }

    impl Read for IdleInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            let _ = self.receiver.recv();
            Ok(0)
        }
    }

    #[test]
    fn test_parse_start_with_customer_name() {
        assert_eq!(
            parse_command("start 12345 João Silva"),
            Ok(UiCommand::Start {
                order_id: "12345".to_string(),
                customer_name: "João Silva".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_start_without_customer() {
        assert_eq!(
            parse_command("START 9"),
            Ok(UiCommand::Start {
                order_id: "9".to_string(),
                customer_name: String::new(),
            })
        );
    }

    #[test]
    fn test_parse_bare_start_generates_order_id() {
        match parse_command("start") {
            Ok(UiCommand::Start {
                order_id,
                customer_name,
            }) => {
                assert_eq!(order_id.len(), 8);
                assert!(customer_name.is_empty());
            }
            other => panic!("Expected a start command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(
            parse_command("status on_the_way"),
            Ok(UiCommand::Status(DeliveryStatus::OnTheWay))
        );
        assert_eq!(
            parse_command("status lost"),
            Err(CommandError::Status(UnknownStatus("lost".to_string())))
        );
        assert_eq!(
            parse_command("status"),
            Err(CommandError::MissingArgument("status"))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("  next "), Ok(UiCommand::Next));
        assert_eq!(parse_command("test"), Ok(UiCommand::Test));
        assert_eq!(parse_command("stop"), Ok(UiCommand::Stop));
        assert_eq!(parse_command("info"), Ok(UiCommand::Info));
        assert_eq!(parse_command("exit"), Ok(UiCommand::Quit));
        assert_eq!(parse_command(""), Err(CommandError::Empty));
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn test_describe_snapshot() {
        let snapshot = TrackingSnapshot {
            activity_id: None,
            current_step: 0,
            last_step: 4,
            current_state: Default::default(),
        };
        assert_eq!(describe(&snapshot), "No live activity active");
    }

    #[test]
    fn test_quit_shuts_down_while_input_is_idle() {
        let (done_sender, done_receiver) = mpsc::channel();
        thread::spawn(move || {
            let system = actix::System::new();
            system.block_on(async {
                let config = TrackerConfig::default();
                let manager =
                    TrackingManager::new(Box::new(ConsoleActivityCenter::new(&config)), &config)
                        .start();
                let shutdown = Arc::new(Notify::new());
                let logger = Logger::new("panel", Color::Magenta);
                let panel = UIHandler::new(manager.clone(), shutdown.clone(), logger.clone())
                    .with_input(BufReader::new(IdleInput::new()))
                    .start();

                manager.send(StartTestDelivery).await.unwrap();
                panel.send(InputLine("quit".to_string())).await.unwrap();
                wait_for_shutdown(&manager, shutdown, &logger).await;

                assert!(!manager.send(IsTracking).await.unwrap());
            });
            drop(system);
            let _ = done_sender.send(());
        });

        assert!(
            done_receiver.recv_timeout(Duration::from_secs(5)).is_ok(),
            "the runtime did not shut down while the input was idle"
        );
    }
}
