use crate::controllers::interactive::data::frame_data::FrameData;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Frame(FrameData),
    /// Sent whenever the computation thread starts or stops working.
    Status { processing: bool },
}
