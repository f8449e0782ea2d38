mod logging;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use quill::app::repl::{self, ReplCommand};
use quill::app::{CommandDispatcher, Shell};
use quill::kernel::services::adapters::{
    resolve_settings, AsyncRuntime, HttpConfigurationService, HttpExecutionRunner,
    MemoryConfigurationService, PromptHost, UnconfiguredRunner,
};
use quill::kernel::services::kernel_bus;
use quill::kernel::services::ports::{
    ConfigurationService, ExecutionRunner, FileHandle, HostApi, Settings,
};

fn main() -> io::Result<()> {
    let log_guard = logging::init();
    if let Some(guard) = &log_guard {
        println!("logs: {}", guard.log_dir().display());
    }
    let settings = resolve_settings();
    let files: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();

    let runtime = AsyncRuntime::new()?;
    runtime.block_on(run(settings, files));
    runtime.shutdown();
    tracing::info!("exiting");
    Ok(())
}

fn remote_services(
    settings: &Settings,
) -> (Arc<dyn ConfigurationService>, Arc<dyn ExecutionRunner>) {
    let configuration: Arc<dyn ConfigurationService> = if settings.configuration_endpoint.is_empty()
    {
        tracing::info!("no configuration endpoint, preferences stay in memory");
        Arc::new(MemoryConfigurationService::new())
    } else {
        Arc::new(HttpConfigurationService::new(
            settings.configuration_endpoint.clone(),
        ))
    };
    let runner: Arc<dyn ExecutionRunner> = if settings.execution_endpoint.is_empty() {
        Arc::new(UnconfiguredRunner)
    } else {
        Arc::new(HttpExecutionRunner::new(settings.execution_endpoint.clone()))
    };
    (configuration, runner)
}

async fn run(settings: Settings, files: Vec<PathBuf>) {
    let (answer_tx, answer_rx) = mpsc::unbounded_channel::<String>();
    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let target = if repl::is_command(&line) {
                &line_tx
            } else {
                &answer_tx
            };
            if target.send(line).is_err() {
                break;
            }
        }
    });

    let base_dir = std::env::current_dir().unwrap_or_default();
    let host = Arc::new(PromptHost::stdio(answer_rx).with_base_dir(base_dir));
    let host_api: Arc<dyn HostApi> = host.clone();
    let (configuration, runner) = remote_services(&settings);

    let mut shell = Shell::new(
        Arc::clone(&host_api),
        configuration,
        runner,
        settings.initial_preferences(),
    );
    let (bus, mut bus_rx) = kernel_bus();
    let mut dispatcher = CommandDispatcher::new(host_api, bus);
    dispatcher.attach();

    shell.load_preferences().await;
    for path in files {
        let path = host.resolve(path);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                shell.open_or_focus(FileHandle::new(path, content));
            }
            Err(e) => println!("! cannot open {}: {e}", path.display()),
        }
    }

    println!("{}", repl::HELP);
    print_status(&mut shell);

    while let Some(line) = line_rx.recv().await {
        let command = match repl::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("! {e}");
                continue;
            }
        };
        match command {
            ReplCommand::Quit => {
                if !shell.state().session.is_dirty()
                    || host
                        .confirm_dialog("Unsaved changes will be lost. Quit anyway?")
                        .await
                {
                    break;
                }
            }
            ReplCommand::Menu(command) => {
                host.emit(command.event_name());
            }
            ReplCommand::Select(path) => {
                let path = host.resolve(path);
                if !shell.state().session.contains(&path) {
                    println!("! {} is not open", path.display());
                } else if !shell.request_select(path.clone()).await {
                    println!("selection unchanged");
                }
            }
            ReplCommand::Close(Some(path)) => {
                let path = host.resolve(path);
                if !shell.state().session.contains(&path) {
                    println!("! {} is not open", path.display());
                } else if !shell.close(&path).await {
                    println!("{} kept open", path.display());
                }
            }
            ReplCommand::Close(None) => {
                shell.close_current();
            }
            ReplCommand::Append(text) => {
                let mut content = shell
                    .state()
                    .session
                    .current_document()
                    .map(|doc| doc.content.clone())
                    .unwrap_or_default();
                content.push_str(&text);
                content.push('\n');
                shell.update_content(content);
            }
            ReplCommand::Run(key) => {
                if let Err(e) = shell.run(key).await {
                    println!("! {e}");
                }
            }
            ReplCommand::Pick(slot) => {
                shell.pick_interpreter(slot).await;
            }
            ReplCommand::Commit => {
                let preferences = shell.state().preferences.clone();
                shell.commit_preferences(preferences).await;
            }
            ReplCommand::Font(size) => {
                let mut preferences = shell.state().preferences.clone();
                preferences.font_size = size;
                shell.commit_preferences(preferences).await;
            }
            ReplCommand::Theme(theme) => {
                shell.set_theme(theme);
            }
            ReplCommand::Status => {}
            ReplCommand::Help => {
                println!("{}", repl::HELP);
                continue;
            }
        }
        shell.pump(&mut bus_rx).await;
        print_status(&mut shell);
    }

    dispatcher.detach();
}

/// Alerts were already shown by the host, so they are dismissed after one render.
fn print_status(shell: &mut Shell) {
    for line in repl::render_status(shell.state()) {
        println!("{line}");
    }
    shell.dismiss_alert();
}
