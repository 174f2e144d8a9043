/// Side effects the main loop carries out after an event is handled.
#[derive(Debug)]
pub enum Action {
    Quit,
}
