pub mod auth;
pub mod config;
pub mod error;
pub mod grpc;
pub mod models;
pub mod services;

/// Generated protobuf/gRPC code from `proto/gym/v1/gym.proto`.
pub mod proto {
    pub mod gym {
        pub mod v1 {
            tonic::include_proto!("gym.v1");
        }
    }
}
