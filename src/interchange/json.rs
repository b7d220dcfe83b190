//! JSON export of a [`Resolution`].
//!
//! The document carries the resolution as-is (ids only) plus a type table
//! mapping every referenced id to its display name, so a collaborator can
//! render forwarders without access to the symbol snapshot.
//!
//! ```json
//! {
//!   "version": 1,
//!   "types": [{ "id": 5, "name": "Demo.IThing", "kind": "Interface" }],
//!   "resolution": { "types": [ ... ] }
//! }
//! ```

use indexmap::IndexSet;
use serde::Serialize;

use super::InterchangeError;
use crate::resolve::{Resolution, TypeResolution};
use crate::symbols::{SymbolHost, TypeId, TypeKind};

/// Current document layout version.
pub const FORMAT_VERSION: u32 = 1;

/// One row of the type table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeEntry {
    pub id: TypeId,
    pub name: String,
    pub kind: TypeKind,
}

/// Serialized form of a resolution.
#[derive(Debug, Serialize)]
pub struct ResolutionDocument<'a> {
    pub version: u32,
    pub types: Vec<TypeEntry>,
    pub resolution: &'a Resolution,
}

impl<'a> ResolutionDocument<'a> {
    /// Build the document, resolving the name of every referenced type.
    pub fn new<H: SymbolHost + ?Sized>(host: &H, resolution: &'a Resolution) -> Result<Self, InterchangeError> {
        let mut referenced = IndexSet::new();
        for ty in &resolution.types {
            collect_types(ty, &mut referenced);
        }

        let types = referenced
            .into_iter()
            .map(|id| {
                let symbol = host.type_symbol(id).ok_or(InterchangeError::UnresolvedType(id))?;
                Ok(TypeEntry {
                    id,
                    name: symbol.name.to_string(),
                    kind: symbol.kind,
                })
            })
            .collect::<Result<Vec<_>, InterchangeError>>()?;

        Ok(Self {
            version: FORMAT_VERSION,
            types,
            resolution,
        })
    }
}

fn collect_types(ty: &TypeResolution, out: &mut IndexSet<TypeId>) {
    out.insert(ty.declaring_type);
    for field in &ty.fields {
        out.insert(field.field_type);
        for target in &field.targets {
            out.insert(target.target.ty);
            for decl in &target.decls {
                out.insert(decl.result_type);
                out.extend(decl.parameters.iter().map(|p| p.ty));
            }
        }
    }
}

/// JSON format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Json {
    pub fn name(&self) -> &'static str {
        "JSON"
    }

    pub fn mime_type(&self) -> &'static str {
        "application/json"
    }

    /// Serialize a resolution as pretty-printed JSON.
    pub fn write<H: SymbolHost + ?Sized>(&self, host: &H, resolution: &Resolution) -> Result<Vec<u8>, InterchangeError> {
        let document = ResolutionDocument::new(host, resolution)?;
        Ok(serde_json::to_vec_pretty(&document)?)
    }

    /// Serialize a resolution into a JSON value.
    pub fn to_value<H: SymbolHost + ?Sized>(
        &self,
        host: &H,
        resolution: &Resolution,
    ) -> Result<serde_json::Value, InterchangeError> {
        let document = ResolutionDocument::new(host, resolution)?;
        Ok(serde_json::to_value(&document)?)
    }
}
