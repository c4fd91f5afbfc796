//! Glossa Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Glossa resolver
//! and its front ends. It includes:
//!
//! - **Identifiers**: Typed numeric ids per entity kind ([`identifier`] module)
//! - **Tags**: The closed tag vocabulary and ordered tag stores ([`tag`] module)
//! - **Model**: Packages, elements, attributes, relationships and diagrams
//!   ([`model`] module)
//! - **Scope**: Visibility classification of resolved URIs ([`scope::Scope`])
//! - **Specification**: Vocabulary or application profile
//!   ([`specification::SpecificationKind`])

pub mod identifier;
pub mod model;
pub mod scope;
pub mod specification;
pub mod tag;
