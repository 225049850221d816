/// Animation graph parameters
pub trait Animator {
    /// Set a named boolean parameter
    fn set_bool(&mut self, name: &str, value: bool);
}
