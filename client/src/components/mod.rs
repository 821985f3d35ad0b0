//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `protected` wraps guarded route views; the rest is static storefront
//! chrome shared by the pages.

pub mod all_products_section;
pub mod header;
pub mod prime_deals_section;
pub mod protected;
