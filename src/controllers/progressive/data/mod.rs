pub mod render_session;
