define_crud_resource! {
    resource: overpack / overpacks;
    path: "overpacks";
}
