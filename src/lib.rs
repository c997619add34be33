#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use wf_action as action;
pub use wf_bind as bind;
pub use wf_utils as utils;

/// Most used items.
pub mod prelude {
    pub use wf_action::{ActionBean, ActionBeanContext, Roundtrip};
    pub use wf_bind::prelude::*;
}
