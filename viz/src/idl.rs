use std::{fs, path::Path};

use anchor_lang_idl_spec::{
    Idl, IdlArrayLen, IdlGenericArg, IdlInstruction, IdlInstructionAccount,
    IdlInstructionAccountItem, IdlType,
};

use crate::error::Error;

pub fn load(path: &Path) -> Result<Idl, Error> {
    let contents = fs::read_to_string(path)?;
    parse(&contents)
}

pub fn parse(contents: &str) -> Result<Idl, Error> {
    Ok(serde_json::from_str(contents)?)
}

/// Flatten composite account groups depth-first, keeping declaration order
pub fn flatten_accounts(items: &[IdlInstructionAccountItem]) -> Vec<&IdlInstructionAccount> {
    let mut accounts = Vec::new();
    for item in items {
        match item {
            IdlInstructionAccountItem::Single(account) => accounts.push(account),
            IdlInstructionAccountItem::Composite(group) => {
                accounts.extend(flatten_accounts(&group.accounts))
            }
        }
    }
    accounts
}

/// Render an IDL type the way it is written in Rust, lower-cased for primitives
pub fn type_label(ty: &IdlType) -> String {
    match ty {
        IdlType::Bool => "bool".to_string(),
        IdlType::U8 => "u8".to_string(),
        IdlType::I8 => "i8".to_string(),
        IdlType::U16 => "u16".to_string(),
        IdlType::I16 => "i16".to_string(),
        IdlType::U32 => "u32".to_string(),
        IdlType::I32 => "i32".to_string(),
        IdlType::F32 => "f32".to_string(),
        IdlType::U64 => "u64".to_string(),
        IdlType::I64 => "i64".to_string(),
        IdlType::F64 => "f64".to_string(),
        IdlType::U128 => "u128".to_string(),
        IdlType::I128 => "i128".to_string(),
        IdlType::U256 => "u256".to_string(),
        IdlType::I256 => "i256".to_string(),
        IdlType::Bytes => "bytes".to_string(),
        IdlType::String => "string".to_string(),
        IdlType::Pubkey => "pubkey".to_string(),
        IdlType::Option(inner) => format!("option<{}>", type_label(inner)),
        IdlType::Vec(inner) => format!("vec<{}>", type_label(inner)),
        IdlType::Array(inner, len) => {
            let len = match len {
                IdlArrayLen::Generic(name) => name.clone(),
                IdlArrayLen::Value(value) => value.to_string(),
            };
            format!("[{}; {}]", type_label(inner), len)
        }
        IdlType::Defined { name, generics } => {
            if generics.is_empty() {
                return name.clone();
            }
            let args = generics
                .iter()
                .map(|arg| match arg {
                    IdlGenericArg::Type { ty } => type_label(ty),
                    IdlGenericArg::Const { value } => value.clone(),
                })
                .collect::<Vec<_>>();
            format!("{}<{}>", name, args.join(", "))
        }
        IdlType::Generic(name) => name.clone(),
        // IdlType is non_exhaustive
        other => format!("{:?}", other).to_lowercase(),
    }
}

/// An instruction argument as shown in the figure
#[derive(Debug, Clone, PartialEq)]
pub struct ArgSummary {
    pub name: String,
    pub ty: String,
}

/// What the figure needs to know about one instruction
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionSummary {
    pub name: String,
    pub signers: Vec<String>,
    pub mutable_accounts: Vec<String>,
    pub immutable_accounts: Vec<String>,
    pub args: Vec<ArgSummary>,
}

impl InstructionSummary {
    pub fn from_instruction(instruction: &IdlInstruction) -> Self {
        let accounts = flatten_accounts(&instruction.accounts);

        let names = |keep: fn(&IdlInstructionAccount) -> bool| {
            accounts
                .iter()
                .filter(|a| keep(a))
                .map(|a| a.name.clone())
                .collect::<Vec<_>>()
        };

        Self {
            name: instruction.name.clone(),
            signers: names(|a| a.signer),
            mutable_accounts: names(|a| a.writable),
            immutable_accounts: names(|a| !a.writable),
            args: instruction
                .args
                .iter()
                .map(|arg| ArgSummary {
                    name: arg.name.clone(),
                    ty: type_label(&arg.ty),
                })
                .collect(),
        }
    }

    /// Account tiles drawn for this instruction, signers included
    pub fn account_count(&self) -> usize {
        self.mutable_accounts.len() + self.immutable_accounts.len()
    }
}

pub fn summarize(idl: &Idl) -> Vec<InstructionSummary> {
    idl.instructions
        .iter()
        .map(InstructionSummary::from_instruction)
        .collect()
}
