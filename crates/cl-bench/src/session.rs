use std::ptr;

use opencl3::{
    command_queue::{CommandQueue, CL_QUEUE_PROFILING_ENABLE},
    context::Context,
    device::Device,
    types::cl_device_id,
};

use crate::ClError;

/// Kontext über alle Geräte der Plattform + eine Profiling‑Queue für das
/// gewählte Gerät. Die Queue ist der einzige Ausführungskanal.
///
/// Feldreihenfolge = Drop‑Reihenfolge: erst Queue, dann Kontext.
pub struct Session {
    queue: CommandQueue,
    context: Context,
    device: Device,
}

impl Session {
    pub fn new(device_ids: &[cl_device_id], selected: usize) -> Result<Self, ClError> {
        let device_id = *device_ids.get(selected).ok_or(ClError::IndexOutOfRange {
            what: "device",
            index: selected,
            count: device_ids.len(),
        })?;

        let context = Context::from_devices(device_ids, &[], None, ptr::null_mut())?;
        log::debug!("context created for {} device(s)", device_ids.len());

        // AOCL kennt nur OpenCL 1.x – daher clCreateCommandQueue
        #[allow(deprecated)]
        let queue = CommandQueue::create(&context, device_id, CL_QUEUE_PROFILING_ENABLE)?;
        log::debug!("profiling queue created on device {selected}");

        Ok(Self {
            queue,
            context,
            device: Device::new(device_id),
        })
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn queue(&self) -> &CommandQueue {
        &self.queue
    }

    pub fn device_id(&self) -> cl_device_id {
        self.device.id()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // ausstehende Kommandos abschließen, bevor Queue & Kontext freigegeben werden
        if let Err(e) = self.queue.finish() {
            log::warn!("queue finish on teardown failed: {e}");
        }
        log::debug!("releasing command queue and context");
    }
}
