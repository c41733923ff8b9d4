//! 界面组件

pub mod form;
pub mod notifications;
pub mod statusbar;
