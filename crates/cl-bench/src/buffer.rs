use std::{marker::PhantomData, mem::ManuallyDrop, ptr};

use bytemuck::Pod;
use opencl3::{
    command_queue::CommandQueue,
    context::Context,
    memory::{Buffer, CL_MEM_READ_WRITE},
    types::CL_BLOCKING,
};

#[cfg(feature = "metrics")]
use crate::metrics::{record, ALLOCS, ALLOC_BYTES};
#[cfg(feature = "metrics")]
use std::{sync::atomic::Ordering, time::Instant};

use crate::ClError;

// ─── Typ‑State‑Marker ────────────────────────────────────────────────
mod sealed {
    pub trait Sealed {}
}

pub trait State: sealed::Sealed {}

/// angelegt, Inhalt undefiniert
pub struct Empty;
impl sealed::Sealed for Empty {}
impl State for Empty {}

/// Host‑Daten liegen auf dem Gerät
pub struct Ready;
impl sealed::Sealed for Ready {}
impl State for Ready {}

/// Host‑ und Device‑Seite müssen byte‑genau gleich groß sein
#[inline]
pub fn ensure_same_size(expected: usize, actual: usize) -> Result<(), ClError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ClError::SizeMismatch { expected, actual })
    }
}

// ─── Device‑Buffer Wrapper ───────────────────────────────────────────

/// Byte‑Buffer auf dem Gerät. Freigabe (clReleaseMemObject) passiert im
/// Drop von `opencl3::memory::Buffer`, auf jedem Pfad.
pub struct DeviceBuffer<S: State> {
    buf: Buffer<u8>,
    len: usize,
    _state: PhantomData<S>,
}

impl<S: State> std::fmt::Debug for DeviceBuffer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceBuffer")
            .field("len", &self.len)
            .field("state", &std::any::type_name::<S>())
            .finish()
    }
}

// ── Empty ────────────────────────────────────────────────────────────
impl DeviceBuffer<Empty> {
    pub fn new(ctx: &Context, len: usize) -> Result<Self, ClError> {
        if len == 0 {
            return Err(ClError::InvalidSize(len));
        }

        #[cfg(feature = "metrics")]
        let t = Instant::now();

        let buf = unsafe { Buffer::<u8>::create(ctx, CL_MEM_READ_WRITE, len, ptr::null_mut())? };

        #[cfg(feature = "metrics")]
        {
            record("DeviceBuffer::new", t);
            ALLOCS.fetch_add(1, Ordering::Relaxed);
            ALLOC_BYTES.fetch_add(len, Ordering::Relaxed);
        }

        log::debug!("device buffer allocated: {len} bytes");
        Ok(Self { buf, len, _state: PhantomData })
    }

    /// blockierender H2D‑Transfer, danach `Ready`
    pub fn write<T: Pod>(mut self, queue: &CommandQueue, host: &[T]) -> Result<DeviceBuffer<Ready>, ClError> {
        self.upload(queue, bytemuck::cast_slice(host))?;
        Ok(self.into_state())
    }
}

// ── Ready ────────────────────────────────────────────────────────────
impl DeviceBuffer<Ready> {
    /// Anlegen + Hochladen in einem Schritt
    pub fn from_slice<T: Pod>(ctx: &Context, queue: &CommandQueue, host: &[T]) -> Result<Self, ClError> {
        DeviceBuffer::<Empty>::new(ctx, std::mem::size_of_val(host))?.write(queue, host)
    }

    /// blockierender D2H‑Transfer
    pub fn read<T: Pod>(&self, queue: &CommandQueue, host_out: &mut [T]) -> Result<(), ClError> {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(host_out);
        ensure_same_size(self.len, bytes.len())?;

        #[cfg(feature = "metrics")]
        let t = Instant::now();

        unsafe { queue.enqueue_read_buffer(&self.buf, CL_BLOCKING, 0, bytes, &[])? };

        #[cfg(feature = "metrics")]
        record("enqueue_read", t);
        Ok(())
    }
}

// ── Accessors (alle States) ──────────────────────────────────────────
impl<S: State> DeviceBuffer<S> {
    /// State‑Wechsel ohne Drop (und ohne Release) des alten Wrappers
    fn into_state<N: State>(self) -> DeviceBuffer<N> {
        let this = ManuallyDrop::new(self);
        // Safety: `this` wird nie gedroppt, der Buffer wechselt genau einmal den Besitzer
        let buf = unsafe { ptr::read(&this.buf) };
        DeviceBuffer { buf, len: this.len, _state: PhantomData }
    }

    fn upload(&mut self, queue: &CommandQueue, bytes: &[u8]) -> Result<(), ClError> {
        ensure_same_size(self.len, bytes.len())?;

        #[cfg(feature = "metrics")]
        let t = Instant::now();

        unsafe { queue.enqueue_write_buffer(&mut self.buf, CL_BLOCKING, 0, bytes, &[])? };

        #[cfg(feature = "metrics")]
        record("enqueue_write", t);
        Ok(())
    }

    #[inline(always)]
    pub fn raw(&self) -> &Buffer<u8> {
        &self.buf
    }

    /// Länge in Bytes
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: State> Drop for DeviceBuffer<S> {
    fn drop(&mut self) {
        #[cfg(feature = "metrics")]
        {
            ALLOCS.fetch_sub(1, Ordering::Relaxed);
            ALLOC_BYTES.fetch_sub(self.len, Ordering::Relaxed);
        }
        log::debug!("device buffer released: {} bytes", self.len);
    }
}
