use fleet_config::constants;
use fleet_core::PipelineRequest;
use tokio::sync::mpsc;

pub struct Channels {
    pub pipeline_tx: mpsc::Sender<PipelineRequest>,
    pub pipeline_rx: mpsc::Receiver<PipelineRequest>,
}

pub fn create_channels() -> Channels {
    let (pipeline_tx, pipeline_rx) = mpsc::channel(constants::PIPELINE_CHANNEL_CAPACITY);

    Channels {
        pipeline_tx,
        pipeline_rx,
    }
}
