pub mod scroll_rig;
