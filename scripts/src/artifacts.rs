//! Resolution of contract names to compiled deployment artifacts

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::{
    dyn_abi::{DynSolType, DynSolValue, JsonAbiExt, Specifier},
    json_abi::JsonAbi,
    primitives::Bytes,
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    constants::{ARTIFACT_EXTENSION, LIBRARY_PLACEHOLDER_MARKER, SOLIDITY_EXTENSION},
    errors::ScriptError,
};

/// A compiled contract, ready to be deployed
#[derive(Clone, Debug)]
pub struct Artifact {
    /// The contract name the artifact was resolved by
    pub name: String,
    /// The contract ABI
    pub abi: JsonAbi,
    /// The contract creation bytecode, without constructor arguments
    pub bytecode: Bytes,
}

/// The subset of a Truffle, Hardhat, or Foundry artifact that we read
#[derive(Deserialize)]
struct RawArtifact {
    /// The contract ABI
    abi: JsonAbi,
    /// The creation bytecode
    bytecode: RawBytecode,
}

/// Truffle and Hardhat store the bytecode as a hex string,
/// Foundry nests it under `object`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    /// A bare hex string
    Hex(String),
    /// An object holding the hex string
    Object {
        /// The hex-encoded bytecode
        object: String,
    },
}

impl RawBytecode {
    /// The hex string, regardless of the layout
    fn hex(&self) -> &str {
        match self {
            RawBytecode::Hex(hex) => hex,
            RawBytecode::Object { object } => object,
        }
    }
}

impl Artifact {
    /// Parse an artifact from the contents of a JSON compilation artifact
    pub fn from_json(name: &str, json: &str) -> Result<Self, ScriptError> {
        let raw: RawArtifact = serde_json::from_str(json)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{name}: {e}")))?;

        let hex = raw.bytecode.hex();
        if hex.contains(LIBRARY_PLACEHOLDER_MARKER) {
            return Err(ScriptError::ArtifactParsing(format!(
                "{name}: bytecode contains unlinked library references"
            )));
        }

        let bytecode =
            Bytes::from_str(hex).map_err(|e| ScriptError::ArtifactParsing(format!("{name}: {e}")))?;
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{name}: empty bytecode, the contract may be abstract or an interface"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            abi: raw.abi,
            bytecode,
        })
    }

    /// Build the contract creation code: the bytecode followed by the
    /// ABI-encoded constructor arguments.
    ///
    /// Each argument is coerced to the Solidity type of the matching
    /// constructor parameter.
    pub fn init_code(&self, args: &[String]) -> Result<Bytes, ScriptError> {
        let encoded_args = match &self.abi.constructor {
            Some(constructor) => {
                if constructor.inputs.len() != args.len() {
                    return Err(ScriptError::CalldataConstruction(format!(
                        "{} constructor takes {} arguments, got {}",
                        self.name,
                        constructor.inputs.len(),
                        args.len()
                    )));
                }

                let values = constructor
                    .inputs
                    .iter()
                    .zip(args)
                    .map(|(param, arg)| {
                        let ty: DynSolType = param
                            .resolve()
                            .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
                        ty.coerce_str(arg).map_err(|e| {
                            ScriptError::CalldataConstruction(format!(
                                "{}: argument `{}` is not a valid {}: {}",
                                self.name, param.name, ty, e
                            ))
                        })
                    })
                    .collect::<Result<Vec<DynSolValue>, ScriptError>>()?;

                constructor
                    .abi_encode_input(&values)
                    .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?
            }
            None if args.is_empty() => vec![],
            None => {
                return Err(ScriptError::CalldataConstruction(format!(
                    "{} has no constructor, got {} arguments",
                    self.name,
                    args.len()
                )))
            }
        };

        Ok([&self.bytecode[..], encoded_args.as_slice()].concat().into())
    }
}

/// Maps a contract name to its compiled artifact
pub trait ArtifactResolver {
    /// Resolve the artifact for the contract `name`
    fn resolve(&self, name: &str) -> Result<Artifact, ScriptError>;
}

/// Resolves artifacts from a build output directory
pub struct ArtifactDir {
    /// The directory to search
    root: PathBuf,
}

impl ArtifactDir {
    /// Resolve artifacts from the directory at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The candidate artifact paths for `name`, in lookup order:
    /// `<root>/<name>.json` (Truffle, Hardhat), then
    /// `<root>/<name>.sol/<name>.json` (Foundry)
    fn candidate_paths(&self, name: &str) -> [PathBuf; 2] {
        let file_name = Path::new(name).with_extension(ARTIFACT_EXTENSION);
        [
            self.root.join(&file_name),
            self.root
                .join(Path::new(name).with_extension(SOLIDITY_EXTENSION))
                .join(&file_name),
        ]
    }
}

impl ArtifactResolver for ArtifactDir {
    fn resolve(&self, name: &str) -> Result<Artifact, ScriptError> {
        let path = self
            .candidate_paths(name)
            .into_iter()
            .find(|path| path.is_file())
            .ok_or_else(|| {
                ScriptError::ArtifactResolution(format!(
                    "no artifact for `{name}` in {}",
                    self.root.display()
                ))
            })?;

        debug!("resolved {name} to {}", path.display());
        let json = fs::read_to_string(&path)
            .map_err(|e| ScriptError::ArtifactResolution(format!("{}: {}", path.display(), e)))?;
        Artifact::from_json(name, &json)
    }
}

impl ArtifactResolver for HashMap<String, Artifact> {
    fn resolve(&self, name: &str) -> Result<Artifact, ScriptError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| ScriptError::ArtifactResolution(format!("no artifact for `{name}`")))
    }
}
