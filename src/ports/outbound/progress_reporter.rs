/// ProgressReporter port for user feedback on stderr
///
/// Keeps loading indicators and action messages out of the rendered output so
/// stdout stays parseable.
pub trait ProgressReporter {
    /// Shows the loading placeholder while a fetch is in flight
    ///
    /// # Arguments
    /// * `what` - Short description of the view being loaded
    fn begin_loading(&self, what: &str);

    /// Removes the loading placeholder
    fn end_loading(&self);

    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an action
    fn report_completion(&self, message: &str);
}
