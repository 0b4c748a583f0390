// Braucht ein echtes OpenCL-Gerät: cargo test -- --ignored

use cl_bench::{DeviceBuffer, Empty, Ready, Session};
use opencl3::{device::CL_DEVICE_TYPE_ALL, platform::get_platforms};

fn first_session() -> Session {
    let platform = get_platforms().unwrap().remove(0);
    let ids = platform.get_devices(CL_DEVICE_TYPE_ALL).unwrap();
    Session::new(&ids, 0).unwrap()
}

#[test]
#[ignore = "needs an OpenCL device"]
fn untouched_buffer_reads_back_last_write() {
    let session = first_session();
    let host = vec![0.25_f32, 0.5, 0.75, 1.0];

    let buf = DeviceBuffer::<Ready>::from_slice(session.context(), session.queue(), &host).unwrap();
    let mut back = vec![0.0_f32; host.len()];
    buf.read(session.queue(), &mut back).unwrap();

    assert_eq!(back, host);
}

#[test]
#[ignore = "needs an OpenCL device"]
fn mismatched_transfer_is_rejected() {
    let session = first_session();
    let buf = DeviceBuffer::<Empty>::new(session.context(), 16).unwrap();
    assert_eq!(buf.len(), 16);

    let err = buf.write(session.queue(), &[1.0_f32; 3]).unwrap_err();
    assert!(matches!(err, cl_bench::ClError::SizeMismatch { expected: 16, actual: 12 }));
}

#[test]
#[ignore = "needs an OpenCL device"]
fn zero_sized_buffer_is_rejected() {
    let session = first_session();
    assert!(matches!(
        DeviceBuffer::<Empty>::new(session.context(), 0),
        Err(cl_bench::ClError::InvalidSize(0))
    ));
}
