use std::{
    io::{self, BufRead, Write},
    ops::ControlFlow,
    sync::Arc,
};

use filemgr_fs::FileStore;
use filemgr_server::{ServerConfig, ServerHandle, start_server};
use log::{debug, info};

use crate::commands::{Command, parse_line};
use crate::printer::ConsolePrinter;

/// The interactive front end: read a line, run it to completion, repeat.
pub struct Prompt<R: BufRead, W: Write, E: Write> {
    store: Arc<FileStore>,
    input: R,
    printer: ConsolePrinter<W, E>,
    server_config: ServerConfig,
    server: Option<ServerHandle>,
}

impl<R: BufRead, W: Write, E: Write> Prompt<R, W, E> {
    /// `server_config` supplies the address and port used by a bare `server`.
    pub fn new(
        store: Arc<FileStore>,
        input: R,
        printer: ConsolePrinter<W, E>,
        server_config: ServerConfig,
    ) -> Self {
        Self {
            store,
            input,
            printer,
            server_config,
            server: None,
        }
    }

    #[cfg(test)]
    pub fn into_printer(self) -> ConsolePrinter<W, E> {
        self.printer
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.printer.banner()?;

        let mut line = String::new();
        loop {
            self.printer.prompt()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                // EOF, e.g. piped input ran out or Ctrl-D.
                self.printer.line("")?;
                self.printer.line("Goodbye!")?;
                break;
            }

            let flow = match parse_line(&line) {
                Ok(Some(cmd)) => self.execute(cmd)?,
                Ok(None) => ControlFlow::Continue(()),
                Err(e) => {
                    self.printer.line(&e.to_string())?;
                    ControlFlow::Continue(())
                }
            };

            if flow.is_break() {
                break;
            }
        }

        Ok(())
    }

    fn execute(&mut self, cmd: Command) -> io::Result<ControlFlow<()>> {
        debug!("[prompt] {:?}", cmd);

        match cmd {
            Command::Create { name, content } => match self.store.create(&name, &content) {
                Ok(()) => self
                    .printer
                    .success(&format!("File '{name}' created successfully"))?,
                Err(e) => self.printer.store_error("creating file", &e)?,
            },
            Command::Read { name } => match self.store.read(&name) {
                Ok(content) => self.printer.file_content(&name, &content)?,
                Err(e) => self.printer.store_error("reading file", &e)?,
            },
            Command::Delete { name } => match self.store.delete(&name) {
                Ok(()) => self
                    .printer
                    .success(&format!("File '{name}' deleted successfully"))?,
                Err(e) => self.printer.store_error("deleting file", &e)?,
            },
            Command::List => match self.store.list() {
                Ok(records) => self.printer.file_list(&records)?,
                Err(e) => self.printer.store_error("listing files", &e)?,
            },
            Command::Info { name } => match self.store.info(&name) {
                Ok(record) => self.printer.file_info(&record)?,
                Err(e) => self.printer.store_error("getting file info", &e)?,
            },
            Command::Server { port } => self.start_server(port)?,
            Command::Help => self.printer.help()?,
            Command::Exit => {
                self.printer.line("Goodbye!")?;
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn start_server(&mut self, port: Option<u16>) -> io::Result<()> {
        if let Some(running) = &self.server {
            let msg = format!("Server already running at {}", running.url());
            return self.printer.failure(&msg);
        }

        let mut config = self.server_config.clone();
        if let Some(port) = port {
            config.port = port;
        }

        match start_server(Arc::clone(&self.store), &config) {
            Ok(handle) => {
                info!("HTTP server started on {}", handle.local_addr());
                self.printer
                    .line(&format!("File Manager Server running at {}", handle.url()))?;
                self.server = Some(handle);
                Ok(())
            }
            Err(e) => self
                .printer
                .failure(&format!("Error starting server: {e:#}")),
        }
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
