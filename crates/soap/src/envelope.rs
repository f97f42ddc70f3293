//! SOAP 1.1 envelope parsing and rendering.
//!
//! Requests are RPC-style: the first element of `Body` names the
//! operation and its children are the parameters, matched by local name
//! so any namespace prefix is accepted.

use std::collections::HashMap;

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::SoapError;

pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Envelope, Body, operation, parameter.
const PARAM_DEPTH: usize = 4;

/// An operation call pulled out of a request envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct SoapRequest {
    pub operation: String,
    /// Parameter values by local name. `None` marks an `xsi:nil` element.
    pub params: HashMap<String, Option<String>>,
}

impl SoapRequest {
    /// Value of a parameter; absent, nil and blank are all `None`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|v| v.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// In-progress parameter: name, nil flag, accumulated text.
struct OpenParam {
    name: String,
    nil: bool,
    text: String,
}

pub fn parse_request(xml: &str) -> Result<SoapRequest, SoapError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut operation: Option<String> = None;
    let mut params = HashMap::new();
    let mut open: Option<OpenParam> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = local_name(&e)?;
                check_position(&path, &name)?;
                match path.len() {
                    2 if is_body(&path) && operation.is_none() => operation = Some(name.clone()),
                    3 if in_operation(&path, &operation) => {
                        open = Some(OpenParam {
                            name: name.clone(),
                            nil: is_nil(&e)?,
                            text: String::new(),
                        });
                    }
                    _ => {}
                }
                path.push(name);
            }
            Event::Empty(e) => {
                let name = local_name(&e)?;
                check_position(&path, &name)?;
                match path.len() {
                    2 if is_body(&path) && operation.is_none() => operation = Some(name),
                    3 if in_operation(&path, &operation) => {
                        let value = if is_nil(&e)? { None } else { Some(String::new()) };
                        params.insert(name, value);
                    }
                    _ => {}
                }
            }
            Event::Text(t) => {
                if let Some(param) = open.as_mut().filter(|_| path.len() == PARAM_DEPTH) {
                    param.text.push_str(&t.unescape()?);
                }
            }
            Event::CData(t) => {
                if let Some(param) = open.as_mut().filter(|_| path.len() == PARAM_DEPTH) {
                    let raw = std::str::from_utf8(&t)
                        .map_err(|e| SoapError::Malformed(e.to_string()))?;
                    param.text.push_str(raw);
                }
            }
            Event::End(_) => {
                if path.len() == PARAM_DEPTH {
                    if let Some(param) = open.take() {
                        let value = if param.nil { None } else { Some(param.text) };
                        params.insert(param.name, value);
                    }
                }
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let operation =
        operation.ok_or_else(|| SoapError::Malformed("SOAP Body contains no operation".into()))?;

    Ok(SoapRequest { operation, params })
}

fn local_name(e: &BytesStart<'_>) -> Result<String, SoapError> {
    let name = e.local_name();
    std::str::from_utf8(name.as_ref())
        .map(str::to_string)
        .map_err(|err| SoapError::Malformed(err.to_string()))
}

/// The root must be `Envelope`; its children may only be `Header` or `Body`.
fn check_position(path: &[String], name: &str) -> Result<(), SoapError> {
    match path.len() {
        0 if name != "Envelope" => Err(SoapError::Malformed(format!(
            "expected Envelope root element, found '{name}'"
        ))),
        1 if name != "Header" && name != "Body" => Err(SoapError::Malformed(format!(
            "unexpected element '{name}' in Envelope"
        ))),
        _ => Ok(()),
    }
}

fn is_body(path: &[String]) -> bool {
    path.get(1).is_some_and(|n| n == "Body")
}

fn in_operation(path: &[String], operation: &Option<String>) -> bool {
    is_body(path) && operation.as_deref() == path.get(2).map(String::as_str)
}

fn is_nil(e: &BytesStart<'_>) -> Result<bool, SoapError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == b"nil" {
            let value = attr.unescape_value()?;
            return Ok(value == "true" || value == "1");
        }
    }
    Ok(false)
}

/// Wrap an operation result as `<{op}Response><{op}Result>text</..></..>`.
pub fn response_envelope(namespace: &str, operation: &str, result: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <soap:Envelope xmlns:soap=\"{SOAP_ENV_NS}\" xmlns:tns=\"{ns}\">\
         <soap:Body>\
         <tns:{operation}Response>\
         <tns:{operation}Result>{result}</tns:{operation}Result>\
         </tns:{operation}Response>\
         </soap:Body>\
         </soap:Envelope>",
        ns = escape(namespace),
        result = escape(result),
    )
}

/// A SOAP 1.1 fault. `code` is `Client` or `Server`.
pub fn fault_envelope(code: &str, message: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <soap:Envelope xmlns:soap=\"{SOAP_ENV_NS}\">\
         <soap:Body>\
         <soap:Fault>\
         <faultcode>soap:{code}</faultcode>\
         <faultstring>{message}</faultstring>\
         </soap:Fault>\
         </soap:Body>\
         </soap:Envelope>",
        message = escape(message),
    )
}
