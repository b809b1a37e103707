//! JSON playground server for the interpreter.
//!
//! Drives the library's tokenize/parse/run surface over HTTP so an editor
//! front-end can inspect tokens, trees and execution timelines:
//!
//! - `POST /execute`  `{"code": "..."}` → output, symbol table, timeline
//! - `POST /tokenize` `{"code": "..."}` → token list
//! - `POST /parse`    `{"code": "..."}` → AST
//! - `GET  /examples`                   → bundled example programs

use std::collections::HashMap;
use std::io::Cursor;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tiny_http::{Header, Method, Request, Response, Server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tinylang::{
    ast::{Program, Stmt},
    examples::{Example, EXAMPLES},
    token::Token,
    Interpreter, Number,
};

const DEFAULT_PORT: u16 = 8080;

const USAGE: &str = "tinylang playground

POST /execute  {\"code\": \"...\"}
POST /tokenize {\"code\": \"...\"}
POST /parse    {\"code\": \"...\"}
GET  /examples
";

type JsonResponse = Response<Cursor<Vec<u8>>>;

#[derive(Deserialize)]
struct CodeRequest {
    code: String,
}

#[derive(Serialize)]
struct ExecuteResponse {
    success: bool,
    output: Vec<String>,
    symbol_table: HashMap<String, Number>,
    timeline: Vec<TimelineEntry>,
    error: Option<String>,
}

/// One executed statement: what ran, what it produced, and the variable
/// state afterwards.
#[derive(Serialize)]
struct TimelineEntry {
    action: &'static str,
    description: String,
    value: Number,
    symbol_table: HashMap<String, Number>,
}

#[derive(Serialize)]
struct TokensResponse {
    success: bool,
    tokens: Vec<Token>,
}

#[derive(Serialize)]
struct AstResponse {
    success: bool,
    ast: Program,
}

#[derive(Serialize)]
struct ExamplesResponse {
    success: bool,
    examples: &'static [Example],
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            success: false,
            error: error.into(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let port = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .map_err(|_| anyhow!("invalid port '{arg}'"))?,
        None => DEFAULT_PORT,
    };

    let server =
        Server::http(("0.0.0.0", port)).map_err(|err| anyhow!("binding port {port}: {err}"))?;
    info!(port, "playground listening");

    for mut request in server.incoming_requests() {
        let response = route(&mut request);
        info!(method = %request.method(), url = %request.url(), "handled request");
        if let Err(err) = request.respond(response) {
            error!("failed to respond: {err}");
        }
    }

    Ok(())
}

fn route(request: &mut Request) -> JsonResponse {
    let method = request.method().clone();
    let url = request.url().to_string();

    match (method, url.as_str()) {
        (Method::Post, "/execute") => with_code(request, execute),
        (Method::Post, "/tokenize") => with_code(request, tokenize),
        (Method::Post, "/parse") => with_code(request, parse),
        (Method::Get, "/examples") => json(&ExamplesResponse {
            success: true,
            examples: EXAMPLES,
        }),
        (Method::Get, "/") => Response::from_string(USAGE),
        _ => json(&ErrorResponse::new("not found")).with_status_code(404),
    }
}

fn with_code<F>(request: &mut Request, handler: F) -> JsonResponse
where
    F: Fn(&str) -> JsonResponse,
{
    let body: CodeRequest = match serde_json::from_reader(request.as_reader()) {
        Ok(body) => body,
        Err(err) => {
            return json(&ErrorResponse::new(format!("invalid request body: {err}")))
                .with_status_code(400)
        }
    };

    if body.code.trim().is_empty() {
        return json(&ErrorResponse::new("no code provided"));
    }

    handler(&body.code)
}

fn execute(code: &str) -> JsonResponse {
    let program = match tinylang::parse(code) {
        Ok(program) => program,
        Err(err) => return json(&ErrorResponse::new(err.to_string())),
    };

    let mut interpreter = Interpreter::new();
    let mut timeline = Vec::new();

    for stmt in &program.statements {
        let value = match interpreter.execute(stmt) {
            Ok(value) => value,
            // all or nothing: buffered output dies with the error
            Err(err) => return json(&ErrorResponse::new(err.to_string())),
        };

        timeline.push(TimelineEntry {
            action: match stmt {
                Stmt::Assign(_) => "assignment",
                Stmt::Print(_) => "print",
            },
            description: stmt.to_string(),
            value,
            symbol_table: interpreter.symbols().clone(),
        });
    }

    let output = interpreter.take_output();
    json(&ExecuteResponse {
        success: true,
        output,
        symbol_table: interpreter.into_symbols(),
        timeline,
        error: None,
    })
}

fn tokenize(code: &str) -> JsonResponse {
    match tinylang::tokenize(code) {
        Ok(tokens) => json(&TokensResponse {
            success: true,
            tokens,
        }),
        Err(err) => json(&ErrorResponse::new(err.to_string())),
    }
}

fn parse(code: &str) -> JsonResponse {
    match tinylang::parse(code) {
        Ok(program) => json(&AstResponse {
            success: true,
            ast: program,
        }),
        Err(err) => json(&ErrorResponse::new(err.to_string())),
    }
}

fn json<T: Serialize>(payload: &T) -> JsonResponse {
    let body = serde_json::to_string(payload).unwrap_or_else(|err| {
        format!(r#"{{"success":false,"error":"serialization failed: {err}"}}"#)
    });

    let mut response = Response::from_string(body);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        response.add_header(header);
    }
    response
}
