//! Request/response client for a single charge controller.

use log::{debug, trace};

use tracerlink_protocol::{
    build_frame, decode_load_control, decode_realtime, read_frame, Command, LoadControlResult,
    ProtocolError, TelemetrySnapshot, Transport, DEFAULT_CONTROLLER_ID,
};

/// A synchronous client for one Tracer charge controller.
///
/// The client owns its transport for the lifetime of the session.
/// Responses carry no request identifier, so interleaved requests would be
/// indistinguishable on the wire; `&mut self` on every operation keeps
/// exchanges strictly one-at-a-time.
#[derive(Debug)]
pub struct TracerClient<T: Transport> {
    transport: T,
    controller_id: u8,
}

impl<T: Transport> TracerClient<T> {
    /// Create a client with the conventional controller address (0x16).
    pub fn new(transport: T) -> Self {
        Self::with_controller_id(transport, DEFAULT_CONTROLLER_ID)
    }

    /// Create a client with an explicit controller address.
    ///
    /// The hardware is not known to check the address, but it is included
    /// in every frame and in the checksum.
    pub fn with_controller_id(transport: T, controller_id: u8) -> Self {
        TracerClient {
            transport,
            controller_id,
        }
    }

    /// The controller address used for every frame this client sends.
    pub fn controller_id(&self) -> u8 {
        self.controller_id
    }

    /// Consume the client and get the transport back.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Establish the underlying connection, for transports that need it.
    pub fn connect(&mut self) -> std::io::Result<()> {
        self.transport.connect()
    }

    /// Tear down the underlying connection.
    pub fn disconnect(&mut self) {
        self.transport.disconnect();
    }

    /// Read the controller's realtime telemetry.
    pub fn read_realtime(&mut self) -> Result<TelemetrySnapshot, ProtocolError> {
        let payload = self.exchange(Command::ReadRealtime, &[])?;
        decode_realtime(&payload)
    }

    /// Switch the load output on or off and return the state the
    /// controller reports back.
    pub fn set_load_on(&mut self, on: bool) -> Result<LoadControlResult, ProtocolError> {
        let payload = self.exchange(Command::ManualControl, &[u8::from(on)])?;
        decode_load_control(&payload)
    }

    /// Send one command and read back the matching response payload.
    ///
    /// Responses for other commands are discarded by the frame reader
    /// until one carrying `command` arrives or the line goes idle.
    fn exchange(&mut self, command: Command, args: &[u8]) -> Result<Vec<u8>, ProtocolError> {
        let frame = build_frame(self.controller_id, command, args)?;
        debug!(
            "sending command 0x{:02X} with {} argument byte(s)",
            command.code(),
            args.len()
        );
        trace!("frame out: {:02X?}", frame);
        self.transport.send(&frame)?;
        let (_, payload) = read_frame(&mut self.transport, Some(command))?;
        Ok(payload)
    }
}
