//! Parsing and validation of raw parameter maps

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};

use crate::modules::error::ConvergeError;
use crate::modules::interface::ModuleParameters;

static MODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-7]{3,4}$").expect("mode pattern is valid"));

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._+@-]*$").expect("name pattern is valid"));

static CLASS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*(::[a-z][a-z0-9_]*)*$").expect("class pattern is valid")
});

/// Parameter document as written; string parameters keep their literal
/// scalar text, so `version: 1.10` is not read as the float 1.1
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParameters {
    ensure: Option<String>,
    status: Option<String>,
    version: Option<String>,
    template: Option<String>,
    source: Option<String>,
    dir_source: Option<String>,
    dir_purge: Option<Value>,
    options: Option<BTreeMap<String, String>>,
    my_class: Option<String>,
    autorestart: Option<Value>,
    noops: Option<Value>,
    audit_only: Option<Value>,
    package: Option<String>,
    service: Option<String>,
    config_dir: Option<String>,
    config_file: Option<String>,
    config_file_mode: Option<String>,
    config_file_owner: Option<String>,
    config_file_group: Option<String>,
}

impl RawParameters {
    fn into_args(self) -> HashMap<String, Value> {
        let mut args = HashMap::new();

        let strings = [
            ("ensure", self.ensure),
            ("status", self.status),
            ("version", self.version),
            ("template", self.template),
            ("source", self.source),
            ("dir_source", self.dir_source),
            ("my_class", self.my_class),
            ("package", self.package),
            ("service", self.service),
            ("config_dir", self.config_dir),
            ("config_file", self.config_file),
            ("config_file_mode", self.config_file_mode),
            ("config_file_owner", self.config_file_owner),
            ("config_file_group", self.config_file_group),
        ];
        for (name, value) in strings {
            if let Some(value) = value {
                args.insert(name.to_string(), Value::String(value));
            }
        }

        let flags = [
            ("dir_purge", self.dir_purge),
            ("autorestart", self.autorestart),
            ("noops", self.noops),
            ("audit_only", self.audit_only),
        ];
        for (name, value) in flags {
            if let Some(value) = value {
                args.insert(name.to_string(), value);
            }
        }

        if let Some(options) = self.options {
            args.insert("options".to_string(), json!(options));
        }
        args
    }
}

const KNOWN_PARAMETERS: &[&str] = &[
    "ensure",
    "status",
    "version",
    "template",
    "source",
    "dir_source",
    "dir_purge",
    "options",
    "my_class",
    "autorestart",
    "noops",
    "audit_only",
    "package",
    "service",
    "config_dir",
    "config_file",
    "config_file_mode",
    "config_file_owner",
    "config_file_group",
];

impl ModuleParameters {
    /// Build parameters from a raw map, as loaded from YAML or JSON
    pub fn from_args(args: &HashMap<String, Value>) -> Result<Self, ConvergeError> {
        let mut unknown: Vec<&String> = args
            .keys()
            .filter(|k| !KNOWN_PARAMETERS.contains(&k.as_str()))
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            let name = unknown[0];
            return Err(ConvergeError::invalid(
                name,
                &args[name],
                "unknown parameter",
            ));
        }

        let mut params = Self::default();

        if let Some(ensure) = string_arg(args, "ensure")? {
            params.ensure = ensure.parse()?;
        }
        if let Some(status) = string_arg(args, "status")? {
            params.status = status.parse()?;
        }

        params.version = optional_string_arg(args, "version")?;
        params.template = optional_string_arg(args, "template")?;
        params.source = optional_string_arg(args, "source")?;
        params.dir_source = optional_string_arg(args, "dir_source")?;
        params.my_class = optional_string_arg(args, "my_class")?;

        if let Some(purge) = bool_arg(args, "dir_purge")? {
            params.dir_purge = purge;
        }
        if let Some(autorestart) = bool_arg(args, "autorestart")? {
            params.autorestart = autorestart;
        }
        if let Some(noops) = bool_arg(args, "noops")? {
            params.noops = noops;
        }
        if let Some(audit_only) = bool_arg(args, "audit_only")? {
            params.audit_only = audit_only;
        }

        if let Some(options) = args.get("options") {
            params.options = options_arg(options)?;
        }

        if let Some(package) = optional_string_arg(args, "package")? {
            params.package = package;
        }
        if let Some(service) = optional_string_arg(args, "service")? {
            params.service = service;
        }
        if let Some(config_dir) = optional_string_arg(args, "config_dir")? {
            params.config_dir = config_dir;
        }
        if let Some(config_file) = optional_string_arg(args, "config_file")? {
            params.config_file = config_file;
        }
        if let Some(mode) = optional_string_arg(args, "config_file_mode")? {
            params.config_file_mode = mode;
        }
        if let Some(owner) = optional_string_arg(args, "config_file_owner")? {
            params.config_file_owner = owner;
        }
        if let Some(group) = optional_string_arg(args, "config_file_group")? {
            params.config_file_group = group;
        }

        params.validate()?;
        Ok(params)
    }

    /// Parse a YAML (or JSON) mapping of parameters
    pub fn from_yaml_str(input: &str) -> Result<Self, ConvergeError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawParameters = serde_yaml::from_str(input).map_err(|e| {
            ConvergeError::invalid("parameters", "<document>", e.to_string())
        })?;
        Self::from_args(&raw.into_args())
    }

    /// Check values that the type system cannot express
    pub fn validate(&self) -> Result<(), ConvergeError> {
        for (param, name) in [("package", &self.package), ("service", &self.service)] {
            if !NAME_PATTERN.is_match(name) {
                return Err(ConvergeError::invalid(
                    param,
                    name,
                    "must be a package or service name",
                ));
            }
        }

        for (param, path) in [
            ("config_dir", &self.config_dir),
            ("config_file", &self.config_file),
        ] {
            if !path.starts_with('/') {
                return Err(ConvergeError::invalid(param, path, "must be an absolute path"));
            }
        }

        if !MODE_PATTERN.is_match(&self.config_file_mode) {
            return Err(ConvergeError::invalid(
                "config_file_mode",
                &self.config_file_mode,
                "must be an octal mode such as 0600",
            ));
        }

        for (param, account) in [
            ("config_file_owner", &self.config_file_owner),
            ("config_file_group", &self.config_file_group),
        ] {
            if account.is_empty() || account.chars().any(|c| c.is_whitespace() || c == ':') {
                return Err(ConvergeError::invalid(param, account, "must be a user or group name"));
            }
        }

        if let Some(class) = &self.my_class {
            if !CLASS_PATTERN.is_match(class) {
                return Err(ConvergeError::invalid("my_class", class, "must be a class name"));
            }
        }

        if let Some(version) = &self.version {
            if version.chars().any(char::is_whitespace) {
                return Err(ConvergeError::invalid("version", version, "must not contain whitespace"));
            }
        }

        Ok(())
    }
}

fn string_arg(args: &HashMap<String, Value>, name: &str) -> Result<Option<String>, ConvergeError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => number_text(name, n).map(Some),
        Some(other) => Err(ConvergeError::invalid(name, other, "must be a string")),
    }
}

/// Empty strings mean "unset"
fn optional_string_arg(
    args: &HashMap<String, Value>,
    name: &str,
) -> Result<Option<String>, ConvergeError> {
    Ok(string_arg(args, name)?.filter(|s| !s.is_empty()))
}

/// Integers are exact; a float no longer carries the text it was written as
fn number_text(name: &str, n: &serde_json::Number) -> Result<String, ConvergeError> {
    if n.is_f64() {
        return Err(ConvergeError::invalid(
            name,
            n,
            "quote the value to keep its exact text",
        ));
    }
    Ok(n.to_string())
}

fn bool_arg(args: &HashMap<String, Value>, name: &str) -> Result<Option<bool>, ConvergeError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::String(s)) => match s.to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "on" | "1" => Ok(Some(true)),
            "false" | "no" | "n" | "off" | "0" | "" => Ok(Some(false)),
            _ => Err(ConvergeError::invalid(name, s, "must be a boolean")),
        },
        Some(other) => Err(ConvergeError::invalid(name, other, "must be a boolean")),
    }
}

fn options_arg(value: &Value) -> Result<BTreeMap<String, String>, ConvergeError> {
    match value {
        Value::Null => Ok(BTreeMap::new()),
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => number_text(&format!("options.{key}"), n)?,
                    Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(ConvergeError::invalid(
                            &format!("options.{key}"),
                            other,
                            "option values must be scalars",
                        ))
                    }
                };
                Ok((key.clone(), rendered))
            })
            .collect(),
        other => Err(ConvergeError::invalid("options", other, "must be a mapping")),
    }
}
