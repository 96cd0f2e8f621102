define_crud_resource! {
    resource: shipment / shipments;
    path: "shipments";
}
